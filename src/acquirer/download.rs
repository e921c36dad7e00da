//! Image byte download with timeout and size cap

use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;

use super::errors::{AcquisitionError, AcquisitionResult};

/// Download the raw bytes at `url`
///
/// The request carries `timeout` and whatever default headers `client` was
/// built with. The body is streamed and rejected as soon as it grows past
/// `max_size`.
pub async fn download_image_bytes(
    client: &Client,
    url: &str,
    timeout: Duration,
    max_size: usize,
) -> AcquisitionResult<Vec<u8>> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|source| AcquisitionError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AcquisitionError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // Enforce limit BEFORE downloading when the server announces a size
    let expected_size = response.content_length().unwrap_or(0);
    if expected_size > max_size as u64 {
        return Err(AcquisitionError::TooLarge {
            url: url.to_string(),
            size: expected_size,
            limit: max_size,
        });
    }

    let mut buffer = if expected_size > 0 {
        Vec::with_capacity(expected_size as usize)
    } else {
        Vec::new()
    };

    let mut stream = response.bytes_stream();
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|source| AcquisitionError::Fetch {
            url: url.to_string(),
            source,
        })?;

        let new_total = buffer.len() + chunk.len();
        if new_total > max_size {
            return Err(AcquisitionError::TooLarge {
                url: url.to_string(),
                size: new_total as u64,
                limit: max_size,
            });
        }

        buffer.extend_from_slice(&chunk);
    }

    Ok(buffer)
}
