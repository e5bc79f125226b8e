//! Symptom triage conversation.
//!
//! One conversation per assistant screen: an opening greeting, then for
//! each submitted description a user message followed by a recommendation
//! generated from keyword matching after a simulated thinking delay.

use std::time::Duration;

use chrono::{Local, Utc};

use crate::catalog::Catalog;
use crate::config;
use crate::matcher;
use crate::models::{ChatMessage, MessageSender};

/// Opening message shown before the user has typed anything.
const GREETING: &str = "¡Hola! Soy tu asistente de salud. Cuéntame tus síntomas y te ayudaré a \
                        encontrar la especialidad médica adecuada.";

/// Marker word every recommendation contains; used to find the latest
/// recommendation when resolving the booking shortcut.
const RECOMMENDATION_MARKER: &str = "recomiendo";

#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    last_id_ms: i64,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                id: "1".to_string(),
                text: GREETING.to_string(),
                sender: MessageSender::Ai,
                timestamp: Local::now().naive_local(),
            }],
            last_id_ms: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Submit a symptom description and wait for the reply.
    ///
    /// Blank input is dropped without a response. The user message keeps
    /// the text as typed; matching runs on the same raw text.
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        self.push(text.to_string(), MessageSender::User);

        tokio::time::sleep(Duration::from_millis(config::ASSISTANT_REPLY_DELAY_MS)).await;

        let specialties = matcher::match_specialties(text);
        tracing::debug!(
            suggestions = specialties.len(),
            "Assistant reply generated"
        );
        self.push(build_recommendation(&specialties), MessageSender::Ai);
        self.messages.last()
    }

    /// Specialty id for the "Agendar Cita" shortcut under the conversation.
    ///
    /// Takes the latest recommendation and returns the first catalog
    /// specialty mentioned in it, walking specialties in catalog order
    /// rather than reply order. Falls back to general medicine.
    pub fn first_suggested_specialty_id(&self, catalog: &Catalog) -> String {
        let last_recommendation = self
            .messages
            .iter()
            .rev()
            .find(|m| m.sender == MessageSender::Ai && m.text.contains(RECOMMENDATION_MARKER));

        if let Some(message) = last_recommendation {
            for specialty in catalog.specialties() {
                if message.text.contains(&specialty.name) {
                    return specialty.id.clone();
                }
            }
        }
        "1".to_string()
    }

    fn push(&mut self, text: String, sender: MessageSender) {
        let id = self.next_id();
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp: Local::now().naive_local(),
        });
    }

    /// Millisecond timestamp id, bumped forward so the user message and
    /// its reply never collide.
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last_id_ms = if now > self.last_id_ms {
            now
        } else {
            self.last_id_ms + 1
        };
        self.last_id_ms.to_string()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

fn build_recommendation(specialties: &[String]) -> String {
    let mut text =
        String::from("Basándome en tus síntomas, te recomiendo consultar con un especialista en:\n\n");
    for specialty in specialties {
        text.push_str(&format!("• **{specialty}**\n"));
    }
    text.push_str("\n¿Te gustaría agendar una cita con alguno de estos especialistas?");
    text
}
