use super::{
    client::Resolver,
    error::{ResolveError, Result},
    types::{ApiResponse, ResolvedMedia},
    validate,
};
use crate::config::ApiConfig;
use async_trait::async_trait;
use tracing::debug;

/// Fallback reason when the upstream reports failure without a message.
const GENERIC_FAILURE: &str = "Failed to fetch video data";

/// Resolution backend backed by the public tikwm.com metadata API.
///
/// One GET per call, no retries, no explicit timeout (reqwest's platform
/// default applies). Stateless between calls.
pub struct TikwmResolver {
    http: reqwest::Client,
    endpoint: String,
    hd: bool,
}

impl TikwmResolver {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            hd: config.hd,
        }
    }
}

#[async_trait]
impl Resolver for TikwmResolver {
    fn name(&self) -> &'static str {
        "tikwm"
    }

    fn supports(&self, url: &str) -> bool {
        validate::is_supported_link(url)
    }

    async fn resolve(&self, url: &str) -> Result<ResolvedMedia> {
        debug!("Requesting resolution for: {}", url);

        let hd = if self.hd { "1" } else { "0" };
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("url", url), ("hd", hd)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!("tikwm raw response: {}", body);

        parse_response(&body)
    }
}

/// Maps the raw upstream body into a resolution outcome.
///
/// Success requires `code == 0`, a present `data` payload, and at least one
/// non-empty media URL; a "success" with all three URLs empty is reported as
/// a failure rather than passed through.
fn parse_response(body: &str) -> Result<ResolvedMedia> {
    let response: ApiResponse = serde_json::from_str(body)?;

    match response.data {
        Some(media) if response.code == 0 => {
            if !media.has_playable_media() {
                return Err(ResolveError::resolution_failed(
                    "the service returned no playable media URLs",
                ));
            }
            Ok(media)
        }
        _ => {
            let message = if response.msg.is_empty() {
                GENERIC_FAILURE.to_string()
            } else {
                response.msg
            };
            Err(ResolveError::ResolutionFailed { message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_BODY: &str = r#"{
        "code": 0,
        "msg": "success",
        "data": {
            "id": "7234567890123456789",
            "title": "A dance video",
            "cover": "https://cdn.example/cover.jpg",
            "author": {
                "nickname": "Dancer",
                "unique_id": "dancer42",
                "avatar": "https://cdn.example/avatar.jpg"
            },
            "play": "https://cdn.example/nowm.mp4",
            "wmplay": "https://cdn.example/wm.mp4",
            "music": "https://cdn.example/audio.mp3",
            "duration": 15
        }
    }"#;

    #[test]
    fn test_success_passes_payload_through() {
        let media = parse_response(SUCCESS_BODY).unwrap();
        assert_eq!(media.id, "7234567890123456789");
        assert_eq!(media.title, "A dance video");
        assert_eq!(media.cover, "https://cdn.example/cover.jpg");
        assert_eq!(media.author.nickname, "Dancer");
        assert_eq!(media.author.unique_id, "dancer42");
        assert_eq!(media.play, "https://cdn.example/nowm.mp4");
        assert_eq!(media.wmplay, "https://cdn.example/wm.mp4");
        assert_eq!(media.music, "https://cdn.example/audio.mp3");
        assert_eq!(media.duration, Some(15));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_response(SUCCESS_BODY).unwrap();
        let second = parse_response(SUCCESS_BODY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_failure_code_carries_upstream_message() {
        let err = parse_response(r#"{"code": 1, "msg": "Video not found"}"#).unwrap_err();
        match err {
            ResolveError::ResolutionFailed { message } => assert_eq!(message, "Video not found"),
            other => panic!("expected ResolutionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let err = parse_response(r#"{"code": -1}"#).unwrap_err();
        match err {
            ResolveError::ResolutionFailed { message } => assert_eq!(message, GENERIC_FAILURE),
            other => panic!("expected ResolutionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_success_code_without_data_is_failure() {
        let err = parse_response(r#"{"code": 0, "msg": "success"}"#).unwrap_err();
        assert!(matches!(err, ResolveError::ResolutionFailed { .. }));
    }

    #[test]
    fn test_all_empty_media_urls_is_failure() {
        let body = r#"{"code": 0, "data": {"id": "1", "play": "", "wmplay": "", "music": ""}}"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, ResolveError::ResolutionFailed { .. }));
    }

    #[test]
    fn test_malformed_json_is_transport_error() {
        let err = parse_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ResolveError::Transport { .. }));
    }

    #[test]
    fn test_supports_delegates_to_validator() {
        let resolver = TikwmResolver::new(&ApiConfig::default());
        assert!(resolver.supports("https://www.tiktok.com/@user/video/123"));
        assert!(!resolver.supports("https://example.com/video"));
    }
}
