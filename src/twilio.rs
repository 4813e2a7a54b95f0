use crate::error::BotError;
use crate::models::{TwilioErrorResponse, TwilioMessageRequest, TwilioMessageResponse};
use crate::security::mask_phone;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub sid: String,
}

/// Outbound SMS delivery.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<DeliveryReceipt, BotError>;
}

pub struct TwilioClient {
    client: Client,
    account_sid: String,
    auth_token: SecretString,
    from_number: String,
    base_url: String,
}

impl TwilioClient {
    pub fn new(
        account_sid: &str,
        auth_token: SecretString,
        from_number: &str,
        api_base: &str,
    ) -> Self {
        Self {
            client: Client::new(),
            account_sid: account_sid.to_string(),
            auth_token,
            from_number: from_number.to_string(),
            base_url: api_base.trim_end_matches('/').to_string(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }
}

#[async_trait]
impl SmsSender for TwilioClient {
    async fn send(&self, to: &str, body: &str) -> Result<DeliveryReceipt, BotError> {
        let request = TwilioMessageRequest {
            to,
            from: &self.from_number,
            body,
        };

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(&request)
            .send()
            .await?;

        if response.status().is_success() {
            let body: TwilioMessageResponse = response.json().await?;
            tracing::info!(sid = %body.sid, to = %mask_phone(to), "SMS accepted by Twilio 🐧");
            Ok(DeliveryReceipt { sid: body.sid })
        } else {
            let status = response.status();
            let message = response
                .json::<TwilioErrorResponse>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "Unknown error".to_string());

            tracing::error!("Twilio Error ({}): {}", status, message);
            Err(BotError::Delivery {
                status: status.as_u16(),
                message,
            })
        }
    }
}
