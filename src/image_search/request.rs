//! Result page request construction

use anyhow::{Context, Result};
use reqwest::header::{
    ACCEPT, ACCEPT_CHARSET, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue,
    USER_AGENT,
};
use url::Url;

use super::types::FilterShorthand;
use crate::utils::{
    BROWSER_ACCEPT, BROWSER_ACCEPT_CHARSET, BROWSER_ACCEPT_ENCODING, BROWSER_ACCEPT_LANGUAGE,
    BROWSER_USER_AGENT,
};

/// Parameters of one result page fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub query: String,
    /// Zero-based page cursor, sent as the `first` offset
    pub page_index: usize,
    /// Count hint for the number of results per page
    pub count: usize,
    pub adult_filter_off: bool,
    pub filter: Option<FilterShorthand>,
}

impl PageRequest {
    /// Value of the `adlt` parameter
    #[must_use]
    pub const fn adult_param(&self) -> &'static str {
        if self.adult_filter_off { "off" } else { "on" }
    }

    /// Build the full request URL against `endpoint`
    ///
    /// `q`, `first`, `count` and `adlt` are form-encoded. `qft` is always
    /// present and appended raw, because the filter token's leading `+` must
    /// reach the server as a form-encoded space rather than `%2B`.
    pub fn to_url(&self, endpoint: &str) -> Result<Url> {
        let mut url = Url::parse(endpoint)
            .with_context(|| format!("Invalid search endpoint: {endpoint}"))?;

        url.query_pairs_mut()
            .append_pair("q", &self.query)
            .append_pair("first", &self.page_index.to_string())
            .append_pair("count", &self.count.to_string())
            .append_pair("adlt", self.adult_param());

        let filter_token = self.filter.map(FilterShorthand::query_token).unwrap_or("");
        let query = format!("{}&qft={}", url.query().unwrap_or_default(), filter_token);
        url.set_query(Some(&query));

        Ok(url)
    }
}

/// Browser-identifying headers required by the search endpoint
///
/// Sent with every page and image request.
#[must_use]
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(ACCEPT_CHARSET, HeaderValue::from_static(BROWSER_ACCEPT_CHARSET));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(BROWSER_ACCEPT_ENCODING));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(filter: Option<FilterShorthand>) -> PageRequest {
        PageRequest {
            query: "red panda & friends".to_string(),
            page_index: 3,
            count: 25,
            adult_filter_off: true,
            filter,
        }
    }

    #[test]
    fn url_carries_all_parameters() {
        let url = request(None)
            .to_url("https://www.bing.com/images/search")
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.bing.com/images/search?q=red+panda+%26+friends&first=3&count=25&adlt=off&qft="
        );
    }

    #[test]
    fn filter_token_is_appended_raw() {
        let url = request(Some(FilterShorthand::Transparent))
            .to_url("https://www.bing.com/images/search")
            .unwrap();

        assert!(url.as_str().ends_with("&adlt=off&qft=+filterui:photo-transparent"));
    }

    #[test]
    fn adult_filter_on() {
        let mut req = request(None);
        req.adult_filter_off = false;
        assert_eq!(req.adult_param(), "on");
        assert!(req.to_url("http://localhost/search").unwrap().as_str().contains("adlt=on"));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        assert!(request(None).to_url("not a url").is_err());
    }

    #[test]
    fn headers_include_keep_alive() {
        let headers = browser_headers();
        assert_eq!(headers[CONNECTION], "keep-alive");
        assert_eq!(headers[ACCEPT_ENCODING], "none");
        assert!(headers.contains_key(USER_AGENT));
        assert!(headers.contains_key(ACCEPT_CHARSET));
        assert!(headers.contains_key(ACCEPT_LANGUAGE));
    }
}
