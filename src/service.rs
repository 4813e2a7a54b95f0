use crate::config::TwilioSettings;
use crate::error::BotError;
use crate::formatter::{daily_message, message_stats, MessageStats};
use crate::security::{mask_phone, redact_phone_numbers};
use crate::twilio::{SmsSender, TwilioClient};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

enum Delivery {
    Ready {
        sender: Arc<dyn SmsSender>,
        recipient: String,
    },
    Unconfigured(Vec<&'static str>),
}

#[derive(Debug, Clone)]
pub struct DailySendOutcome {
    pub message_sid: String,
    pub message: String,
    pub stats: MessageStats,
    pub sent_at: DateTime<Utc>,
}

pub struct DailyTextService {
    delivery: Delivery,
}

impl DailyTextService {
    /// Missing Twilio settings are not fatal here; every send reports them instead.
    pub fn from_settings(settings: &TwilioSettings) -> Self {
        let delivery = match settings.credentials() {
            Ok(creds) => Delivery::Ready {
                sender: Arc::new(TwilioClient::new(
                    &creds.account_sid,
                    creds.auth_token,
                    &creds.from_number,
                    &creds.api_base,
                )),
                recipient: creds.recipient_number,
            },
            Err(missing) => {
                warn!(
                    "Twilio is not fully configured, daily sends will fail: {}",
                    missing.join(", ")
                );
                Delivery::Unconfigured(missing)
            }
        };
        Self { delivery }
    }

    pub fn with_sender(sender: Arc<dyn SmsSender>, recipient: &str) -> Self {
        Self {
            delivery: Delivery::Ready {
                sender,
                recipient: recipient.to_string(),
            },
        }
    }

    pub async fn send_daily(&self, now: DateTime<Utc>) -> Result<DailySendOutcome, BotError> {
        let (sender, recipient) = match &self.delivery {
            Delivery::Ready { sender, recipient } => (sender, recipient),
            Delivery::Unconfigured(missing) => {
                return Err(BotError::MissingConfig(missing.clone()));
            }
        };

        let message = daily_message(now);
        let stats = message_stats(&message);
        info!(
            length = stats.length,
            segments = stats.segments,
            to = %mask_phone(recipient),
            "Sending daily penguin message"
        );

        let receipt = match sender.send(recipient, &message).await {
            Ok(receipt) => receipt,
            Err(e) => {
                error!("Failed to send daily SMS: {}", redact_phone_numbers(&e.to_string()));
                return Err(e);
            }
        };

        Ok(DailySendOutcome {
            message_sid: receipt.sid,
            message,
            stats,
            sent_at: now,
        })
    }
}
