//! Request types for the Quaderno API client.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Quaderno API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Retrieve a resource or collection.
    Get,
    /// Create a resource.
    Post,
    /// Update a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method must carry a body.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Ordered query parameters. Pairs are serialized in insertion order.
pub type Query = Vec<(String, String)>;

/// Path and query of a single request, relative to the client's base URL.
///
/// # Example
///
/// ```rust
/// use quaderno_api::RequestDescriptor;
///
/// let request = RequestDescriptor::new("contacts")
///     .query_param("q", "Stark")
///     .query_param("page", "2");
///
/// assert_eq!(request.pathname, "contacts");
/// assert_eq!(request.query.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Path below the API root, e.g. `invoices` or `invoices/42`.
    pub pathname: String,
    /// Optional query parameters.
    pub query: Option<Query>,
}

impl RequestDescriptor {
    /// Creates a descriptor with no query.
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: None,
        }
    }

    /// Replaces the query.
    #[must_use]
    pub fn with_query(mut self, query: Option<Query>) -> Self {
        self.query = query;
        self
    }

    /// Appends one query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Validates the descriptor for the given method and body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - the path is empty after stripping slashes
    /// - `method` is `Post` or `Put` and `has_body` is `false`
    pub fn verify(&self, method: HttpMethod, has_body: bool) -> Result<(), InvalidHttpRequestError> {
        if self.pathname.trim_matches('/').is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }

        if method.requires_body() && !has_body {
            return Err(InvalidHttpRequestError::MissingBody {
                method: method.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_http_method_into_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(
            reqwest::Method::from(HttpMethod::Delete),
            reqwest::Method::DELETE
        );
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let request = RequestDescriptor::new("invoices")
            .query_param("z", "1")
            .query_param("a", "2");

        assert_eq!(
            request.query.unwrap(),
            vec![
                ("z".to_string(), "1".to_string()),
                ("a".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_verify_requires_body_for_post_and_put() {
        let request = RequestDescriptor::new("invoices");

        assert!(matches!(
            request.verify(HttpMethod::Post, false),
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
        assert!(matches!(
            request.verify(HttpMethod::Put, false),
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "put"
        ));
        assert!(request.verify(HttpMethod::Get, false).is_ok());
        assert!(request.verify(HttpMethod::Delete, false).is_ok());
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        assert_eq!(
            RequestDescriptor::new("").verify(HttpMethod::Get, false),
            Err(InvalidHttpRequestError::EmptyPath)
        );
        assert_eq!(
            RequestDescriptor::new("//").verify(HttpMethod::Get, false),
            Err(InvalidHttpRequestError::EmptyPath)
        );
    }
}
