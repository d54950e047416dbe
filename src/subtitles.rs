//! Subtitle retrieval pipeline: fetch, gunzip, UTF-8 decode.
//!
//! Any failure in either stage collapses into the opaque
//! [`Error::SubtitleFetch`]; the underlying cause is logged server-side
//! and never exposed to callers.

use crate::error::{Error, Result};
use crate::types::SubtitlePayload;
use flate2::read::GzDecoder;
use std::io::Read;

/// Fetches remote gzip-compressed subtitle files and decompresses them
/// for attachment-style delivery.
pub struct SubtitleRetriever {
    client: reqwest::Client,
}

impl SubtitleRetriever {
    /// Create a retriever using the given HTTP client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch `url`, treat the body as gzip-compressed UTF-8 text, and
    /// return the decompressed payload.
    ///
    /// The entire payload is materialized in memory; subtitle files are
    /// small enough that streaming decompression buys nothing.
    pub async fn retrieve(&self, url: &str) -> Result<SubtitlePayload> {
        tracing::debug!(url = %url, "fetching subtitle");

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "subtitle fetch failed");
            Error::SubtitleFetch
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "subtitle fetch returned non-success");
            return Err(Error::SubtitleFetch);
        }

        let compressed = response.bytes().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "failed to read subtitle body");
            Error::SubtitleFetch
        })?;

        let text = gunzip_utf8(&compressed).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "subtitle decompression failed");
            Error::SubtitleFetch
        })?;

        Ok(SubtitlePayload { text })
    }
}

/// Decompress a gzip body into UTF-8 text.
///
/// `read_to_string` surfaces both invalid gzip and invalid UTF-8 as
/// `io::Error`, which covers the two failure modes of this stage.
fn gunzip_utf8(compressed: &[u8]) -> std::io::Result<String> {
    let mut decoder = GzDecoder::new(compressed);
    let mut text = String::new();
    decoder.read_to_string(&mut text)?;
    Ok(text)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    fn gzip(text: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    const SRT: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello\n";

    #[test]
    fn test_gunzip_round_trip() {
        let compressed = gzip(SRT);
        assert_eq!(gunzip_utf8(&compressed).unwrap(), SRT);
    }

    #[test]
    fn test_gunzip_rejects_plain_bytes() {
        assert!(gunzip_utf8(b"this is not gzip").is_err());
    }

    #[test]
    fn test_gunzip_rejects_invalid_utf8() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0xff, 0xfe, 0x80]).unwrap();
        let compressed = encoder.finish().unwrap();
        assert!(gunzip_utf8(&compressed).is_err());
    }

    #[test]
    fn test_payload_constants() {
        assert_eq!(SubtitlePayload::FILENAME, "subtitle.srt");
        assert_eq!(SubtitlePayload::MEDIA_TYPE, "application/octet-stream");
    }

    #[tokio::test]
    async fn test_retrieve_happy_path() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sub.srt.gz"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(gzip(SRT)))
            .mount(&server)
            .await;

        let retriever = SubtitleRetriever::new(reqwest::Client::new());
        let payload = retriever
            .retrieve(&format!("{}/sub.srt.gz", server.uri()))
            .await
            .unwrap();
        assert_eq!(payload.text, SRT);
    }

    #[tokio::test]
    async fn test_retrieve_non_gzip_body_is_opaque_failure() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sub.srt.gz"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"plain text".to_vec()))
            .mount(&server)
            .await;

        let retriever = SubtitleRetriever::new(reqwest::Client::new());
        let err = retriever
            .retrieve(&format!("{}/sub.srt.gz", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SubtitleFetch));
        // Opaque: the error text never mentions the cause
        assert_eq!(err.to_string(), "error fetching subtitle");
    }

    #[tokio::test]
    async fn test_retrieve_upstream_error_status() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.gz"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let retriever = SubtitleRetriever::new(reqwest::Client::new());
        let err = retriever
            .retrieve(&format!("{}/missing.gz", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SubtitleFetch));
    }

    #[tokio::test]
    async fn test_retrieve_unreachable_host() {
        let retriever = SubtitleRetriever::new(reqwest::Client::new());
        // Port 1 on localhost is essentially never listening
        let err = retriever
            .retrieve("http://127.0.0.1:1/sub.gz")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SubtitleFetch));
    }
}
