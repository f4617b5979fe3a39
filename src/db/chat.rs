// src/db/chat.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::chat::token::{generate_token_default, hash_token};
use crate::domain::chat::{ChatMessage, ChatRole};
use crate::errors::ServerError;

/// Opens a chat session and returns the raw token for the cookie.
/// Only the token's hash is stored.
pub fn create_chat_session(conn: &Connection, now: i64) -> Result<String, ServerError> {
    let raw_token = generate_token_default();
    let hash = hash_token(&raw_token);

    conn.execute(
        "insert into chat_sessions (token_hash, created_at) values (?, ?)",
        params![hash.as_slice(), now],
    )
    .map_err(|e| ServerError::DbError(format!("create chat session failed: {e}")))?;

    Ok(raw_token)
}

pub fn find_chat_session(conn: &Connection, raw_token: &str) -> Result<Option<i64>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        "select id from chat_sessions where token_hash = ?",
        params![hash.as_slice()],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("chat session lookup failed: {e}")))
}

pub fn append_message(
    conn: &Connection,
    session_id: i64,
    message: &ChatMessage,
    now: i64,
) -> Result<(), ServerError> {
    conn.execute(
        "insert into chat_messages (session_id, role, content, created_at) values (?, ?, ?, ?)",
        params![session_id, message.role.as_str(), message.content, now],
    )
    .map_err(|e| ServerError::DbError(format!("append chat message failed: {e}")))?;
    Ok(())
}

/// The session's messages, oldest first.
pub fn load_transcript(conn: &Connection, session_id: i64) -> Result<Vec<ChatMessage>, ServerError> {
    let mut stmt = conn
        .prepare("select role, content from chat_messages where session_id = ? order by id")
        .map_err(|e| ServerError::DbError(format!("prepare transcript failed: {e}")))?;

    let rows = stmt
        .query_map(params![session_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(|e| ServerError::DbError(format!("transcript query failed: {e}")))?;

    let mut messages = Vec::new();
    for row in rows {
        let (role, content) =
            row.map_err(|e| ServerError::DbError(format!("read transcript row failed: {e}")))?;
        let role = ChatRole::parse(&role)
            .ok_or_else(|| ServerError::DbError(format!("unknown chat role {role:?}")))?;
        messages.push(ChatMessage { role, content });
    }
    Ok(messages)
}

pub fn clear_transcript(conn: &Connection, session_id: i64) -> Result<(), ServerError> {
    conn.execute(
        "delete from chat_messages where session_id = ?",
        params![session_id],
    )
    .map_err(|e| ServerError::DbError(format!("clear transcript failed: {e}")))?;
    Ok(())
}
