//! API utilities for frontend-backend communication

/// Port the backend listens on
const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/gallery");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Value of `name` in a `?a=b&c=d` query string, percent-decoded
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Query parameter of the current page URL
pub fn current_query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    query_param(&search, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_and_decodes_param() {
        assert_eq!(
            query_param("?lang=ar&reset=abc%2Ddef", "reset").as_deref(),
            Some("abc-def")
        );
        assert_eq!(query_param("?reset=", "reset"), None);
        assert_eq!(query_param("", "reset"), None);
    }
}
