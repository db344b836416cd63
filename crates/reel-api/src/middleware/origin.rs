//! # Origin Allow-List
//!
//! Browser requests are accepted only from configured origins. Requests
//! without an `Origin` header (same-origin navigation, curl, server-side
//! callers) are always accepted. Anything else is refused with 403 before a
//! route handler runs.
//!
//! Accepted cross-origin requests get their CORS response headers from
//! `tower_http::cors::CorsLayer`, built from the same list.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::header::{CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::AppError;

/// Shared allow-list, installed as a request extension.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Arc<Vec<HeaderValue>>,
}

impl OriginPolicy {
    /// Build the policy from configured origins. Entries that are not valid
    /// header values can never match a request and are dropped.
    pub fn new(origins: &[String]) -> Self {
        let allowed = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "ignoring unusable allowed origin");
                    None
                }
            })
            .collect();
        Self {
            allowed: Arc::new(allowed),
        }
    }

    /// Whether a request with this `Origin` header may proceed.
    pub fn allows(&self, origin: Option<&HeaderValue>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.allowed.contains(origin),
        }
    }

    /// CORS response headers for the allowed origins.
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.allowed.iter().cloned()))
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([CONTENT_TYPE])
    }
}

/// Middleware that rejects requests from origins outside the allow-list.
pub async fn origin_guard(request: Request, next: Next) -> Response {
    let policy = request.extensions().get::<OriginPolicy>().cloned();

    if let Some(policy) = policy {
        let origin = request.headers().get(ORIGIN);
        if !policy.allows(origin) {
            tracing::warn!(
                origin = ?origin,
                method = %request.method(),
                uri = %request.uri(),
                "rejected request from disallowed origin"
            );
            return AppError::OriginRejected.into_response();
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> OriginPolicy {
        OriginPolicy::new(&[
            "http://localhost:8080".to_string(),
            "http://localhost:3000".to_string(),
        ])
    }

    #[test]
    fn missing_origin_is_allowed() {
        assert!(policy().allows(None));
    }

    #[test]
    fn listed_origin_is_allowed() {
        let origin = HeaderValue::from_static("http://localhost:8080");
        assert!(policy().allows(Some(&origin)));
    }

    #[test]
    fn unlisted_origin_is_rejected() {
        let origin = HeaderValue::from_static("https://evil.test");
        assert!(!policy().allows(Some(&origin)));
        let near_miss = HeaderValue::from_static("http://localhost:8081");
        assert!(!policy().allows(Some(&near_miss)));
    }

    #[test]
    fn invalid_configured_origin_is_dropped() {
        let policy = OriginPolicy::new(&["bad\norigin".to_string()]);
        assert!(policy.allowed.is_empty());
        assert!(policy.allows(None));
    }
}
