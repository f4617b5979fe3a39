use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// Redirect that also sets a session cookie scoped to `path`.
pub fn redirect_with_cookie(location: &str, name: &str, value: &str, path: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .header(
            "Set-Cookie",
            format!("{name}={value}; Path={path}; HttpOnly; SameSite=Lax"),
        )
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
