use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap, HeaderValue,
};

/// Build the auth header set for backend calls from the request cookies.
///
/// The API client never reads cookies itself; handlers pass the result of
/// this function along with every authenticated call.
pub fn auth_header(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    if let Some(token) = cookie_value(headers, "token") {
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
            out.insert(AUTHORIZATION, value);
        }
    }
    out
}

/// Current user id from the session cookies, 0 when not logged in.
pub fn user_id(headers: &HeaderMap) -> i64 {
    cookie_value(headers, "user_id")
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn bearer_header_from_token_cookie() {
        let headers = request_headers("theme=dark; token=abc123; user_id=7");
        let auth = auth_header(&headers);
        assert_eq!(auth.get(AUTHORIZATION).unwrap(), "Bearer abc123");
    }

    #[test]
    fn no_token_cookie_means_no_header() {
        let auth = auth_header(&request_headers("theme=dark"));
        assert!(auth.get(AUTHORIZATION).is_none());
        assert!(auth_header(&HeaderMap::new()).get(AUTHORIZATION).is_none());
    }

    #[test]
    fn user_id_parses_or_defaults_to_zero() {
        assert_eq!(user_id(&request_headers("user_id=42")), 42);
        assert_eq!(user_id(&request_headers("user_id=oops")), 0);
        assert_eq!(user_id(&HeaderMap::new()), 0);
    }
}
