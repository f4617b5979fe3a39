use crate::chat::ChatAssistant;
use crate::db::Database;
use crate::errors::ServerError;
use crate::handlers::{chat, sales};
use crate::responses::{html_response, text_response, ResultResp};
use crate::templates;
use astra::{Request, Response};
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

/// Everything a request handler needs.
pub struct App {
    pub db: Database,
    pub chat_password: String,
    pub assistant: Box<dyn ChatAssistant>,
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/health") => text_response("ok"),

        ("GET", "/sales") => sales::show(&req, app),
        ("GET", "/sales/export") => sales::export(&req, app),

        ("GET", "/chat") => chat::show(&req, app),
        ("POST", "/chat/unlock") => chat::unlock(req, app),
        ("POST", "/chat/messages") => chat::send(req, app),
        ("POST", "/chat/reset") => chat::reset(&req, app),

        _ => Err(ServerError::NotFound),
    }
}

/// Runs `handle`, turns errors into error pages and logs the outcome.
pub fn respond(req: Request, app: &App) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(%method, %path, error = %err, "request failed");
            }
            templates::html_error_response(err)
        }
    };

    tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
    resp
}

/// Decoded query string parameters. Later duplicates win.
pub fn query_params(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Decoded `application/x-www-form-urlencoded` body.
pub fn form_params(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

pub fn cookie(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
