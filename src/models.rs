use crate::formatter::MessageStats;
use serde::{Deserialize, Serialize};

// Twilio Models
#[derive(Serialize)]
pub struct TwilioMessageRequest<'a> {
    #[serde(rename = "To")]
    pub to: &'a str,
    #[serde(rename = "From")]
    pub from: &'a str,
    #[serde(rename = "Body")]
    pub body: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct TwilioMessageResponse {
    pub sid: String,
}

#[derive(Deserialize, Debug)]
pub struct TwilioErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Form fields of Twilio's inbound message webhook.
#[derive(Deserialize, Debug, Default)]
pub struct InboundSms {
    #[serde(rename = "From", default)]
    pub from: Option<String>,
    #[serde(rename = "Body", default)]
    pub body: Option<String>,
    #[serde(rename = "MessageSid", default)]
    pub message_sid: Option<String>,
}

// API Models
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DailySendResponse {
    pub success: bool,
    pub message_sid: String,
    pub message: String,
    pub stats: MessageStats,
    pub sent_at: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
