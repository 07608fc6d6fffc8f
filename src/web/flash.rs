//! Flash cookie plumbing
//!
//! The flash message travels as a value on the redirect response, not in
//! any server-side session store. The redirect sets the cookie; the next
//! rendered page reads it, injects it into the template, and clears it
//! with `Max-Age=0`.

use axum::http::header::{HeaderMap, HeaderValue, COOKIE};

use crate::domain::flash::FlashMessage;
use crate::domain::DomainError;

/// Name of the flash cookie
pub const FLASH_COOKIE: &str = "flash";

/// Build the `Set-Cookie` value that attaches a flash to a redirect
pub fn set_cookie_value(flash: &FlashMessage) -> Result<HeaderValue, DomainError> {
    let value = format!("{}={}; Path=/; HttpOnly", FLASH_COOKIE, flash.to_cookie_value());
    HeaderValue::from_str(&value)
        .map_err(|e| DomainError::internal(format!("Invalid flash cookie value: {}", e)))
}

/// Build the `Set-Cookie` value that clears a consumed flash
pub fn clear_cookie_value() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; Max-Age=0")
}

/// Read the flash cookie from the request, if any.
///
/// Malformed cookies decode as no flash at all.
pub fn take_flash(headers: &HeaderMap) -> Option<FlashMessage> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;

    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .and_then(|(_, value)| FlashMessage::from_cookie_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::flash::FlashLevel;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_set_and_take_round_trip() {
        let flash = FlashMessage::success("Login realizado com sucesso!");
        let set_cookie = set_cookie_value(&flash).unwrap();

        // Simulate the browser echoing the cookie back
        let cookie_pair = set_cookie
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();
        let headers = headers_with_cookie(&cookie_pair);

        let taken = take_flash(&headers).unwrap();
        assert_eq!(taken.level(), FlashLevel::Success);
        assert_eq!(taken.message(), "Login realizado com sucesso!");
    }

    #[test]
    fn test_take_flash_without_cookie() {
        assert!(take_flash(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_take_flash_among_other_cookies() {
        let flash = FlashMessage::success("ok");
        let encoded = flash.to_cookie_value();
        let headers = headers_with_cookie(&format!("theme=dark; flash={}; lang=pt", encoded));

        assert_eq!(take_flash(&headers).unwrap().message(), "ok");
    }

    #[test]
    fn test_take_flash_malformed_value() {
        let headers = headers_with_cookie("flash=!!not-base64!!");
        assert!(take_flash(&headers).is_none());
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let value = clear_cookie_value();
        assert!(value.to_str().unwrap().contains("Max-Age=0"));
    }
}
