//! Voice Platform Envelope
//!
//! Typed request/response envelope for the Alexa-style event contract,
//! plus the `speak` composer that wraps a sentence in the response shape.
//! The envelope is consumed as-is; this module owns no decision logic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Incoming platform event
#[derive(Debug, Clone, Deserialize)]
pub struct SkillEvent {
    pub request: SkillRequest,
}

/// The request block of a platform event
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRequest {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub intent: Option<Intent>,
}

/// An invoked intent with its slot values
#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub value: Option<String>,
}

impl SkillEvent {
    /// Raw spoken fragment for a slot, if the platform filled it
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        self.request
            .intent
            .as_ref()
            .and_then(|i| i.slots.get(slot))
            .and_then(|s| s.value.as_deref())
    }
}

/// Outgoing platform response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillResponse {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseBody {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
    #[serde(rename = "shouldEndSession")]
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

/// Wrap a spoken sentence in the platform response envelope
///
/// Every path through the skill ends the session; no scenario asks a
/// follow-up question.
pub fn speak(text: &str) -> SkillResponse {
    SkillResponse {
        version: "1.0".to_string(),
        response: ResponseBody {
            output_speech: OutputSpeech {
                speech_type: "PlainText".to_string(),
                text: text.to_string(),
            },
            should_end_session: true,
        },
    }
}
