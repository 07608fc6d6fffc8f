//! Error responses for the page routes
//!
//! Template and storage failures surface as an HTML 500 page; the body
//! carries the underlying error only in debug mode.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::domain::page::escape_html;
use crate::domain::DomainError;

/// Error rendered as an HTML page
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    detail: Option<String>,
}

impl PageError {
    /// Wrap a domain error; `debug` keeps the underlying message in the body
    pub fn from_domain(err: DomainError, debug: bool) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: debug.then(|| err.to_string()),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let detail = match &self.detail {
            Some(detail) => format!("<pre>{}</pre>", escape_html(detail)),
            None => String::new(),
        };
        let body = format!(
            "<!DOCTYPE html><html lang=\"pt-br\"><head><meta charset=\"UTF-8\">\
             <title>Gestor - Erro</title></head><body>\
             <h1>Erro interno do servidor</h1>{}</body></html>",
            detail
        );

        (self.status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_mode_keeps_detail() {
        let err = PageError::from_domain(DomainError::template("boom"), true);
        assert_eq!(err.detail.as_deref(), Some("Template error: boom"));
    }

    #[test]
    fn test_release_mode_hides_detail() {
        let err = PageError::from_domain(DomainError::template("boom"), false);
        assert!(err.detail.is_none());
    }

    #[test]
    fn test_into_response_is_500() {
        let response =
            PageError::from_domain(DomainError::internal("x"), false).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
