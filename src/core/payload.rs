use crate::domain::model::Payload;
use crate::utils::error::{Result, UploadError};
use bytes::{Bytes, BytesMut};
use futures::StreamExt;

/// Turns the host's payload into one contiguous body.
///
/// Streams are drained completely into memory in emission order; there is no
/// upper bound on the buffered size.
pub async fn resolve(payload: Option<&mut Payload>) -> Result<Bytes> {
    match payload {
        Some(Payload::Buffer(bytes)) => Ok(bytes.clone()),
        Some(Payload::Stream(stream)) => {
            let mut buffer = BytesMut::new();
            let mut chunks = 0usize;
            while let Some(chunk) = stream.next().await {
                buffer.extend_from_slice(&chunk?);
                chunks += 1;
            }
            tracing::debug!("Drained {} chunks ({} bytes) from stream", chunks, buffer.len());
            Ok(buffer.freeze())
        }
        None => Err(UploadError::ContentMissing),
    }
}
