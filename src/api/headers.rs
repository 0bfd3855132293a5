//! Default request headers matching the web client's browser profile.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, ORIGIN, PRAGMA,
    REFERER, USER_AGENT,
};

const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Linux; Android 11; SM-T870) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/93.0.4577.62 Safari/537.36";

/// The header set attached to every service request.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(ORIGIN, HeaderValue::from_static("https://odyssey.sonic.game"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(
        HeaderName::from_static("priority"),
        HeaderValue::from_static("u=1, i"),
    );
    headers.insert(REFERER, HeaderValue::from_static("https://odyssey.sonic.game/"));
    headers.insert(
        HeaderName::from_static("sec-ch-ua"),
        HeaderValue::from_static("\"Not/A)Brand\";v=\"8\", \"Chromium\";v=\"126\", \"Brave\";v=\"126\""),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-mobile"),
        HeaderValue::from_static("?0"),
    );
    headers.insert(
        HeaderName::from_static("sec-ch-ua-platform"),
        HeaderValue::from_static("\"macOS\""),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-site"),
    );
    headers.insert(HeaderName::from_static("sec-gpc"), HeaderValue::from_static("1"));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_headers_present() {
        let headers = default_headers();
        assert_eq!(headers.get(ORIGIN).unwrap(), "https://odyssey.sonic.game");
        assert_eq!(headers.get(REFERER).unwrap(), "https://odyssey.sonic.game/");
        assert!(headers.get(USER_AGENT).is_some());
        assert_eq!(headers.len(), 15);
    }
}
