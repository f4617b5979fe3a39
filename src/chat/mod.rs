pub mod context;
pub mod gemini;
pub mod token;

use thiserror::Error;

use crate::domain::chat::ChatMessage;

pub use context::sales_context;
pub use gemini::GeminiAssistant;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("ยังไม่ได้ตั้งค่า API key สำหรับ AI")]
    MissingApiKey,
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("AI ไม่ได้ส่งคำตอบกลับมา")]
    EmptyReply,
}

/// Answers a question about the sales data.
///
/// `context` describes the data, `history` is the conversation so far (not
/// including `question`).
pub trait ChatAssistant: Send + Sync {
    fn reply(
        &self,
        context: &str,
        history: &[ChatMessage],
        question: &str,
    ) -> Result<String, ChatError>;
}
