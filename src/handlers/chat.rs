// src/handlers/chat.rs
use astra::Request;
use chrono::Utc;

use crate::chat::sales_context;
use crate::chat::token::password_matches;
use crate::db::chat::{
    append_message, clear_transcript, create_chat_session, find_chat_session, load_transcript,
};
use crate::db::sales::load_sales_records;
use crate::domain::chat::{normalize_message, ChatMessage};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, redirect_with_cookie, ResultResp};
use crate::router::{cookie, form_params, App};
use crate::templates::pages::{chat_gate_page, chat_page, ChatVm};

pub const SESSION_COOKIE: &str = "chat_session";

fn now_unix() -> i64 {
    Utc::now().timestamp()
}

fn current_session(req: &Request, app: &App) -> Result<Option<i64>, ServerError> {
    match cookie(req, SESSION_COOKIE) {
        Some(token) => app.db.with_conn(|conn| find_chat_session(conn, &token)),
        None => Ok(None),
    }
}

fn require_session(req: &Request, app: &App) -> Result<i64, ServerError> {
    current_session(req, app)?.ok_or_else(|| ServerError::Unauthorized("chat is locked".into()))
}

/// GET /chat
pub fn show(req: &Request, app: &App) -> ResultResp {
    let Some(session_id) = current_session(req, app)? else {
        return html_response(chat_gate_page(false));
    };

    let messages = app.db.with_conn(|conn| load_transcript(conn, session_id))?;
    html_response(chat_page(&ChatVm {
        messages,
        error: None,
    }))
}

/// POST /chat/unlock
pub fn unlock(mut req: Request, app: &App) -> ResultResp {
    let form = form_params(&mut req)?;
    let submitted = form.get("password").map(String::as_str).unwrap_or("");

    if !password_matches(submitted, &app.chat_password) {
        tracing::info!("chat unlock rejected");
        return html_response(chat_gate_page(true));
    }

    // An already unlocked browser keeps its session.
    if current_session(&req, app)?.is_some() {
        return redirect("/chat");
    }

    let token = app.db.with_conn(|conn| create_chat_session(conn, now_unix()))?;
    tracing::info!("chat unlocked");
    redirect_with_cookie("/chat", SESSION_COOKIE, &token, "/chat")
}

/// POST /chat/messages
///
/// The question is stored before the assistant is asked, so it stays in the
/// transcript when the call fails.
pub fn send(mut req: Request, app: &App) -> ResultResp {
    let session_id = require_session(&req, app)?;
    let form = form_params(&mut req)?;
    let Some(question) = form.get("message").and_then(|m| normalize_message(m)) else {
        return redirect("/chat");
    };

    let history = app.db.with_conn(|conn| load_transcript(conn, session_id))?;
    app.db.with_conn(|conn| {
        append_message(conn, session_id, &ChatMessage::user(question), now_unix())
    })?;

    let reply = app
        .db
        .with_conn(|conn| load_sales_records(conn))
        .map_err(|e| e.to_string())
        .and_then(|records| {
            app.assistant
                .reply(&sales_context(&records), &history, question)
                .map_err(|e| e.to_string())
        });

    match reply {
        Ok(answer) => {
            app.db.with_conn(|conn| {
                append_message(conn, session_id, &ChatMessage::model(answer), now_unix())
            })?;
            redirect("/chat")
        }
        Err(message) => {
            tracing::warn!(error = %message, "chat reply failed");
            let messages = app.db.with_conn(|conn| load_transcript(conn, session_id))?;
            html_response(chat_page(&ChatVm {
                messages,
                error: Some(message),
            }))
        }
    }
}

/// POST /chat/reset
pub fn reset(req: &Request, app: &App) -> ResultResp {
    let session_id = require_session(req, app)?;
    app.db.with_conn(|conn| clear_transcript(conn, session_id))?;
    redirect("/chat")
}
