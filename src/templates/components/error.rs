use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, Markup, DOCTYPE};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) | ServerError::Unauthorized(msg) => msg.clone(),
        other => other.to_string(),
    };
    render_error(status, &message)
}

/// Inline error box. The message is shown as-is.
pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="error" role="alert" {
            strong { "เกิดข้อผิดพลาด: " }
            (message)
        }
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="th" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
            }
            body style="font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem;" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← กลับหน้าหลัก" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
