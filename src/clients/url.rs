//! URL composition.
//!
//! Joins a [`BaseUrl`] with a [`RequestDescriptor`]. The result only depends
//! on its inputs, so the same pair always yields the same string.

use crate::auth::BaseUrl;
use crate::clients::http_request::RequestDescriptor;

/// Builds the absolute URL for a request.
///
/// Leading slashes on the path are collapsed so exactly one `/` separates
/// host and path. Query pairs are percent-encoded and kept in order; an
/// absent or empty query adds no `?`.
///
/// # Example
///
/// ```rust
/// use quaderno_api::{compose_url, BaseUrl, ClientOptions, RequestDescriptor};
///
/// let options = ClientOptions::builder().token("tok").build().unwrap();
/// let base = BaseUrl::resolve(&options);
/// let request = RequestDescriptor::new("/contacts").query_param("q", "Tony Stark");
///
/// assert_eq!(
///     compose_url(&base, &request),
///     "https://quadernoapp.com/api/contacts?q=Tony%20Stark"
/// );
/// ```
#[must_use]
pub fn compose_url(base: &BaseUrl, request: &RequestDescriptor) -> String {
    let mut url = format!(
        "{}://{}/{}",
        base.protocol(),
        base.hostname().trim_end_matches('/'),
        request.pathname.trim_start_matches('/')
    );

    if let Some(query) = request.query.as_ref().filter(|q| !q.is_empty()) {
        let encoded = query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&encoded);
    }

    url
}
