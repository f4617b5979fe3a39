// src/chat/gemini.rs

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::chat::{ChatAssistant, ChatError};
use crate::domain::chat::{ChatMessage, ChatRole};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Calls the Gemini `generateContent` endpoint.
pub struct GeminiAssistant {
    api_key: Option<String>,
    model: String,
    client: Client,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiAssistant {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/{}:generateContent", self.model)
    }
}

fn build_request<'a>(
    context: &'a str,
    history: &'a [ChatMessage],
    question: &'a str,
) -> GenerateRequest<'a> {
    let mut contents: Vec<Content<'a>> = history
        .iter()
        .map(|m| Content {
            role: Some(m.role.as_str()),
            parts: vec![Part { text: &m.content }],
        })
        .collect();
    contents.push(Content {
        role: Some(ChatRole::User.as_str()),
        parts: vec![Part { text: question }],
    });

    GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part { text: context }],
        },
        contents,
    }
}

/// Concatenated text of the first candidate.
fn extract_reply(resp: GenerateResponse) -> Result<String, ChatError> {
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(ChatError::EmptyReply)
    } else {
        Ok(text)
    }
}

impl ChatAssistant for GeminiAssistant {
    fn reply(
        &self,
        context: &str,
        history: &[ChatMessage],
        question: &str,
    ) -> Result<String, ChatError> {
        let api_key = self.api_key.as_deref().ok_or(ChatError::MissingApiKey)?;
        let payload = build_request(context, history, question);

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .map_err(|e| ChatError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(ChatError::ApiError(format!("{status} - {body}")));
        }

        let parsed: GenerateResponse = resp
            .json()
            .map_err(|e| ChatError::ApiError(format!("unreadable response: {e}")))?;

        extract_reply(parsed)
    }
}
