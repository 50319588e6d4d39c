//! Outbound request description.

use launchdeck_core::NetworkError;
use serde::Serialize;

/// HTTP method for a fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET, no body.
    Get,
    /// POST with a JSON body.
    Post,
}

/// How a request interacts with the response cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Skip the cache read; the network result is still written back.
    #[default]
    NetworkOnly,
    /// Emit a stale cached response first, then the fresh network response.
    CacheThenNetwork,
}

/// An immutable description of one outbound request.
///
/// Paths are joined onto the configured base URL; absolute URLs are not
/// accepted (the transport talks to exactly one host).
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
    cache_policy: CachePolicy,
}

impl FetchRequest {
    /// Builds a GET request for an API path.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            cache_policy: CachePolicy::default(),
        }
    }

    /// Builds a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidRequest`] if the body fails to
    /// serialize.
    pub fn post(path: impl Into<String>, body: &impl Serialize) -> Result<Self, NetworkError> {
        let body = serde_json::to_value(body)
            .map_err(|e| NetworkError::InvalidRequest(format!("unserializable body: {e}")))?;
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
            cache_policy: CachePolicy::default(),
        })
    }

    /// Returns a copy with the given cache policy.
    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The API path, relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The JSON body, if any.
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// The cache policy.
    pub fn cache_policy(&self) -> CachePolicy {
        self.cache_policy
    }

    /// A stable cache key covering everything that shapes the response.
    pub fn cache_key(&self) -> String {
        let method = match self.method {
            Method::Get => "GET",
            Method::Post => "POST",
        };
        match &self.body {
            Some(body) => format!("{method} {} {body}", self.path),
            None => format!("{method} {}", self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_request_has_no_body() {
        let request = FetchRequest::get("/v4/company");
        assert_eq!(request.method(), Method::Get);
        assert!(request.body().is_none());
        assert_eq!(request.cache_policy(), CachePolicy::NetworkOnly);
    }

    #[test]
    fn cache_keys_distinguish_bodies() {
        let a = FetchRequest::post("/v5/launches/query", &serde_json::json!({"page": 1})).unwrap();
        let b = FetchRequest::post("/v5/launches/query", &serde_json::json!({"page": 2})).unwrap();
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn cache_keys_are_stable() {
        let request = FetchRequest::get("/v4/company");
        assert_eq!(request.cache_key(), request.cache_key());
        assert_eq!(request.cache_key(), "GET /v4/company");
    }
}
