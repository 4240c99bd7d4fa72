//! Chatbot request DTOs

use serde::Deserialize;
use validator::Validate;

/// Chatbot question
#[derive(Debug, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(length(min = 1, max = 2048))]
    pub question: String,
}

/// History query parameters
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}
