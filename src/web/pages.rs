//! Page handlers - login gate and the static section pages

use std::collections::HashMap;

use axum::{
    extract::{Form, State},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::auth::LoginOutcome;
use crate::domain::flash::FlashMessage;
use crate::domain::page;

use super::error::PageError;
use super::flash;
use super::state::AppState;

/// Submitted login form; absent fields arrive as empty strings
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// `GET /` - unconditional redirect to the login page
pub async fn home() -> Redirect {
    Redirect::to("/login")
}

/// `GET /login` - render the login form with no error; a pending flash
/// is still consumed and cleared here
pub async fn login_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    render_page(&state, page::LOGIN, &headers, StatusCode::OK)
}

/// `POST /login` - delegate to the credential check
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    match state.credentials.check(&form.username, &form.password) {
        LoginOutcome::Authenticated => {
            info!(username = %form.username, "Login accepted");

            let flash = FlashMessage::success("Login realizado com sucesso!");
            let cookie = flash::set_cookie_value(&flash)
                .map_err(|e| PageError::from_domain(e, state.debug))?;

            let mut response = Redirect::to("/main").into_response();
            response.headers_mut().append(SET_COOKIE, cookie);
            Ok(response)
        }
        LoginOutcome::Rejected { message } => {
            debug!(username = %form.username, "Login rejected");

            let mut values = HashMap::new();
            values.insert("error".to_string(), message.to_string());

            let html = state
                .pages
                .render(page::LOGIN, &values)
                .map_err(|e| PageError::from_domain(e, state.debug))?;

            Ok(Html(html).into_response())
        }
    }
}

/// `GET /main` - the post-login panel
pub async fn main_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    render_page(&state, page::MAIN, &headers, StatusCode::OK)
}

/// `GET /vendas`
pub async fn vendas(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    render_page(&state, page::VENDAS, &headers, StatusCode::OK)
}

/// `GET /produtos`
pub async fn produtos(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    render_page(&state, page::PRODUTOS, &headers, StatusCode::OK)
}

/// `GET /estoque`
pub async fn estoque(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    render_page(&state, page::ESTOQUE, &headers, StatusCode::OK)
}

/// `GET /clientes`
pub async fn clientes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    render_page(&state, page::CLIENTES, &headers, StatusCode::OK)
}

/// `GET /relatorios`
pub async fn relatorios(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    render_page(&state, page::RELATORIOS, &headers, StatusCode::OK)
}

/// `GET /qualidade`
pub async fn qualidade(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    render_page(&state, page::QUALIDADE, &headers, StatusCode::OK)
}

/// Fallback - render the not-found page with status 404
pub async fn not_found(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, PageError> {
    render_page(&state, page::NOT_FOUND, &headers, StatusCode::NOT_FOUND)
}

/// Render a fixed template, consuming a pending flash if one arrived.
///
/// The flash value is injected into the template (pages without a flash
/// slot ignore it) and the cookie is cleared on the way out, so the
/// message is read at most once.
pub fn render_page(
    state: &AppState,
    template_id: &str,
    headers: &HeaderMap,
    status: StatusCode,
) -> Result<Response, PageError> {
    let flash = flash::take_flash(headers);

    let mut values = HashMap::new();
    if let Some(ref flash) = flash {
        values.insert("flash".to_string(), flash.message().to_string());
    }

    let html = state
        .pages
        .render(template_id, &values)
        .map_err(|e| PageError::from_domain(e, state.debug))?;

    let mut response = (status, Html(html)).into_response();
    if flash.is_some() {
        response
            .headers_mut()
            .append(SET_COOKIE, flash::clear_cookie_value());
    }

    Ok(response)
}
