use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::MessageSender;

/// One entry in the assistant transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: MessageSender,
    pub timestamp: NaiveDateTime,
}
