//! Object keys and public URLs.
//!
//! Every rendition the host generates for an image (`thumbnail_`, `large_`,
//! `medium_`, `small_` prefixed copies) lands in the same folder as the
//! original, named after the original's base name:
//!
//! ```text
//! {path_prefix}{base_name}/{file_name}
//! ```

use crate::domain::model::UploadableFile;

pub const SIZE_VARIANT_PREFIXES: [&str; 4] = ["thumbnail_", "large_", "medium_", "small_"];

const PUBLIC_OBJECT_PATH: &str = "/storage/v1/object/public/";

/// `name` when the host supplied a non-empty one, otherwise `hash + ext`.
pub fn file_name(file: &UploadableFile) -> String {
    match given_name(file) {
        Some(name) => name.to_string(),
        None => format!("{}{}", file.hash, file.ext),
    }
}

/// Folder name shared by all size variants of one logical file.
pub fn base_name(file: &UploadableFile) -> String {
    let stem = strip_extension(given_name(file).unwrap_or(&file.hash));
    strip_size_variant(stem).to_string()
}

pub fn object_key(path_prefix: &str, file: &UploadableFile) -> String {
    format!("{}{}/{}", path_prefix, base_name(file), file_name(file))
}

pub fn public_url(endpoint_url: &str, bucket: &str, key: &str) -> String {
    format!(
        "{}{}{}/{}",
        endpoint_url.trim_end_matches('/'),
        PUBLIC_OBJECT_PATH,
        bucket,
        key
    )
}

/// Inverse of [`public_url`] for the configured bucket. Only the text after the
/// `/storage/v1/object/public/{bucket}/` separator is used, so the host part
/// of the URL does not matter.
pub fn key_from_public_url<'a>(url: &'a str, bucket: &str) -> Option<&'a str> {
    let separator = format!("{}{}/", PUBLIC_OBJECT_PATH, bucket);
    url.split(separator.as_str())
        .nth(1)
        .filter(|key| !key.is_empty())
}

// An empty name counts as no name.
fn given_name(file: &UploadableFile) -> Option<&str> {
    file.name.as_deref().filter(|name| !name.is_empty())
}

// Drops the last `.ext` segment; dots inside directories or a trailing dot are kept.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => {
            let ext = &name[idx + 1..];
            if ext.is_empty() || ext.contains('/') {
                name
            } else {
                &name[..idx]
            }
        }
        None => name,
    }
}

fn strip_size_variant(name: &str) -> &str {
    SIZE_VARIANT_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> UploadableFile {
        UploadableFile::new("abc123", ".png", "image/png").with_name(name)
    }

    #[test]
    fn test_size_variant_and_extension_are_stripped() {
        let file = named("small_photo.png");
        assert_eq!(file_name(&file), "small_photo.png");
        assert_eq!(base_name(&file), "photo");
        assert_eq!(object_key("", &file), "photo/small_photo.png");
    }

    #[test]
    fn test_all_variants_share_one_folder() {
        for name in [
            "photo.png",
            "thumbnail_photo.png",
            "large_photo.png",
            "medium_photo.png",
            "small_photo.png",
        ] {
            assert_eq!(base_name(&named(name)), "photo", "{}", name);
        }
    }

    #[test]
    fn test_only_one_variant_prefix_is_stripped() {
        assert_eq!(base_name(&named("small_large_photo.png")), "large_photo");
    }

    #[test]
    fn test_variant_marker_must_be_leading() {
        assert_eq!(base_name(&named("my_small_photo.png")), "my_small_photo");
    }

    #[test]
    fn test_falls_back_to_hash_and_ext() {
        let file = UploadableFile::new("abc123", ".png", "image/png");
        assert_eq!(file_name(&file), "abc123.png");
        assert_eq!(base_name(&file), "abc123");
        assert_eq!(object_key("uploads/", &file), "uploads/abc123/abc123.png");
    }

    #[test]
    fn test_empty_name_falls_back_to_hash() {
        let file = UploadableFile::new("abc123", ".png", "image/png").with_name("");
        assert_eq!(file_name(&file), "abc123.png");
        assert_eq!(base_name(&file), "abc123");
        assert_eq!(object_key("uploads/", &file), "uploads/abc123/abc123.png");
    }

    #[test]
    fn test_only_last_extension_is_stripped() {
        assert_eq!(base_name(&named("archive.tar.gz")), "archive.tar");
        assert_eq!(base_name(&named("README")), "README");
        assert_eq!(base_name(&named("weird.")), "weird.");
        assert_eq!(base_name(&named("dir.d/file")), "dir.d/file");
    }

    #[test]
    fn test_public_url_shape() {
        assert_eq!(
            public_url("https://example.supabase.co", "mybucket", "photo/abc123.png"),
            "https://example.supabase.co/storage/v1/object/public/mybucket/photo/abc123.png"
        );
        assert_eq!(
            public_url("https://example.supabase.co/", "mybucket", "a/b.png"),
            "https://example.supabase.co/storage/v1/object/public/mybucket/a/b.png"
        );
    }

    #[test]
    fn test_key_from_public_url() {
        assert_eq!(
            key_from_public_url(
                "https://host/storage/v1/object/public/mybucket/photo/abc123.png",
                "mybucket"
            ),
            Some("photo/abc123.png")
        );
        assert_eq!(key_from_public_url("https://example.com/invalid-url", "mybucket"), None);
        assert_eq!(
            key_from_public_url("https://host/storage/v1/object/public/otherbucket/a.png", "mybucket"),
            None
        );
        assert_eq!(
            key_from_public_url("https://host/storage/v1/object/public/mybucket/", "mybucket"),
            None
        );
    }

    #[test]
    fn test_public_url_round_trips_through_key_parser() {
        let file = named("thumbnail_cat.jpg");
        let key = object_key("media/", &file);
        let url = public_url("https://example.supabase.co", "assets", &key);
        assert_eq!(key_from_public_url(&url, "assets"), Some(key.as_str()));
    }
}
