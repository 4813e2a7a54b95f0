use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    #[error("Twilio API error ({status}): {message}")]
    Delivery { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),
}
