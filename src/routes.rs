//! HTTP surface: the cron-triggered daily sender and Twilio's inbound webhook.

use crate::models::{DailySendResponse, ErrorResponse, InboundSms};
use crate::penguin::ThreadRandom;
use crate::responder::{respond, ERROR_REPLY};
use crate::security::{is_authorized, mask_phone, redact_phone_numbers};
use crate::service::DailyTextService;
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::routing::post;
use axum::{Form, Json, Router};
use axum_macros::debug_handler;
use chrono::Utc;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub daily: Arc<DailyTextService>,
    pub cron_secret: Arc<str>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/send-daily-text",
            get(send_daily_text).post(send_daily_text),
        )
        .route("/api/receive-sms", post(receive_sms))
        .route("/health", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[debug_handler]
pub async fn send_daily_text(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if !is_authorized(auth_header, &state.cron_secret) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Unauthorized".to_string(),
                details: None,
            }),
        )
            .into_response();
    }

    match state.daily.send_daily(Utc::now()).await {
        Ok(outcome) => {
            info!(sid = %outcome.message_sid, "Daily penguin message sent");
            Json(DailySendResponse {
                success: true,
                message_sid: outcome.message_sid,
                message: outcome.message,
                stats: outcome.stats,
                sent_at: outcome.sent_at.to_rfc3339(),
            })
            .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to send SMS".to_string(),
                details: Some(e.to_string()),
            }),
        )
            .into_response(),
    }
}

/// Always answers 200 with TwiML so Twilio never retries the webhook.
#[debug_handler]
pub async fn receive_sms(payload: Result<Form<InboundSms>, FormRejection>) -> Response {
    let reply = match payload {
        Ok(Form(sms)) => {
            info!(
                from = %sms.from.as_deref().map(mask_phone).unwrap_or_default(),
                body = %redact_phone_numbers(sms.body.as_deref().unwrap_or_default()),
                sid = sms.message_sid.as_deref().unwrap_or_default(),
                "Received SMS"
            );
            respond(sms.body.as_deref(), Utc::now(), &mut ThreadRandom)
        }
        Err(rejection) => {
            error!("Error processing SMS: {}", rejection);
            ERROR_REPLY.to_string()
        }
    };

    twiml_response(&reply)
}

fn twiml_response(message: &str) -> Response {
    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        escape_xml(message)
    );
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/xml")], body).into_response()
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TwilioSettings;
    use crate::responder::{HELP_TEXT, UNKNOWN_COMMAND};
    use crate::service::tests::RecordingSender;
    use axum::body::Body;
    use axum::http::{HeaderValue, Request};
    use tower::ServiceExt;

    fn state_with(service: DailyTextService) -> AppState {
        AppState {
            daily: Arc::new(service),
            cron_secret: Arc::from("s3cret"),
        }
    }

    fn bearer(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn inbound(body: Option<&str>) -> Result<Form<InboundSms>, FormRejection> {
        Ok(Form(InboundSms {
            from: Some("+15552223333".to_string()),
            body: body.map(str::to_string),
            message_sid: Some("SM1".to_string()),
        }))
    }

    #[tokio::test]
    async fn test_send_daily_rejects_bad_secret() {
        let state = state_with(DailyTextService::from_settings(&TwilioSettings::default()));

        let response = send_daily_text(State(state.clone()), bearer("Bearer nope")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_text(response).await, r#"{"error":"Unauthorized"}"#);

        let response = send_daily_text(State(state), HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_send_daily_success_payload() {
        let sender = Arc::new(RecordingSender::default());
        let state = state_with(DailyTextService::with_sender(sender.clone(), "+15552223333"));

        let response = send_daily_text(State(state), bearer("Bearer s3cret")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["messageSid"], "SM0123456789");
        let message = json["message"].as_str().unwrap();
        assert_eq!(json["stats"]["length"], message.encode_utf16().count());
        assert!(json["stats"]["segments"].as_u64().unwrap() >= 1);
        assert!(json["sentAt"].is_string());
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_send_daily_missing_config_is_structured_error() {
        let state = state_with(DailyTextService::from_settings(&TwilioSettings::default()));

        let response = send_daily_text(State(state), bearer("Bearer s3cret")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["error"], "Failed to send SMS");
        assert!(json["details"]
            .as_str()
            .unwrap()
            .contains("TWILIO_ACCOUNT_SID"));
    }

    #[tokio::test]
    async fn test_receive_sms_replies_with_twiml() {
        let response = receive_sms(inbound(Some(" help "))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/xml");

        let body = body_text(response).await;
        assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>"));
        assert!(body.contains(&escape_xml(HELP_TEXT)));
        assert!(body.contains("Larry &amp; Steve"));
    }

    #[tokio::test]
    async fn test_receive_sms_without_body_is_unknown_command() {
        let response = receive_sms(inbound(None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(UNKNOWN_COMMAND));
    }

    #[tokio::test]
    async fn test_receive_sms_malformed_payload_gets_fallback_twiml() {
        let app = build_router(state_with(DailyTextService::from_settings(
            &TwilioSettings::default(),
        )));
        let request = Request::builder()
            .method("POST")
            .uri("/api/receive-sms")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"Body":"FACT"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/xml");

        let body = body_text(response).await;
        assert!(body.contains(&format!("<Message>{}</Message>", escape_xml(ERROR_REPLY))));
        assert!(body.contains("Larry &amp; Steve encountered an error"));
    }

    #[tokio::test]
    async fn test_receive_sms_form_body_through_router() {
        let app = build_router(state_with(DailyTextService::from_settings(
            &TwilioSettings::default(),
        )));
        let request = Request::builder()
            .method("POST")
            .uri("/api/receive-sms")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("From=%2B15552223333&Body=+hElP+&MessageSid=SM1"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(&escape_xml(HELP_TEXT)));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("<a & 'b'>"), "&lt;a &amp; &apos;b&apos;&gt;");
    }
}
