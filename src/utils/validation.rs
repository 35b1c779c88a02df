use crate::utils::error::{Result, UploadError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(UploadError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Fails with `MissingConfigError` for empty or whitespace-only values.
pub fn validate_present(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UploadError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

// Supabase bucket ids: letters, digits and a handful of punctuation, no slashes.
pub fn validate_bucket_name(field_name: &str, bucket: &str) -> Result<()> {
    validate_present(field_name, bucket)?;

    if !bucket
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' '))
    {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: bucket.to_string(),
            reason: "Bucket name can only contain letters, numbers, spaces, '-', '_' and '.'"
                .to_string(),
        });
    }

    Ok(())
}

pub fn validate_path_prefix(field_name: &str, prefix: &str) -> Result<()> {
    if prefix.contains('\0') {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    if prefix.starts_with('/') {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Path prefix must be relative to the bucket root".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint_url", "https://example.supabase.co").is_ok());
        assert!(validate_url("endpoint_url", "http://localhost:54321").is_ok());
        assert!(validate_url("endpoint_url", "").is_err());
        assert!(validate_url("endpoint_url", "invalid-url").is_err());
        assert!(validate_url("endpoint_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_present() {
        assert!(validate_present("api_key", "secret").is_ok());
        assert!(matches!(
            validate_present("api_key", "   "),
            Err(UploadError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_bucket_name() {
        assert!(validate_bucket_name("bucket_name", "media-assets").is_ok());
        assert!(validate_bucket_name("bucket_name", "media_2024.v1").is_ok());
        assert!(validate_bucket_name("bucket_name", "media/assets").is_err());
        assert!(validate_bucket_name("bucket_name", "").is_err());
    }

    #[test]
    fn test_validate_path_prefix() {
        assert!(validate_path_prefix("path_prefix", "").is_ok());
        assert!(validate_path_prefix("path_prefix", "uploads/").is_ok());
        assert!(validate_path_prefix("path_prefix", "/uploads/").is_err());
        assert!(validate_path_prefix("path_prefix", "up\0loads").is_err());
    }
}
