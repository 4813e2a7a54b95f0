use crate::error::BotError;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::net::SocketAddr;
use tracing::warn;

const DEFAULT_CRON_SECRET: &str = "default-secret";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";

#[derive(Debug, Default)]
pub struct TwilioSettings {
    pub account_sid: Option<String>,
    pub auth_token: Option<SecretString>,
    pub from_number: Option<String>,
    pub recipient_number: Option<String>,
    pub api_base: String,
}

/// Fully-present Twilio settings, checked at send time.
#[derive(Debug)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: SecretString,
    pub from_number: String,
    pub recipient_number: String,
    pub api_base: String,
}

impl TwilioSettings {
    /// On failure, returns the names of every missing variable.
    pub fn credentials(&self) -> Result<TwilioCredentials, Vec<&'static str>> {
        let mut missing = Vec::new();
        let mut take = |value: Option<&str>, name: &'static str| match value {
            Some(v) => v.to_string(),
            None => {
                missing.push(name);
                String::new()
            }
        };

        let account_sid = take(self.account_sid.as_deref(), "TWILIO_ACCOUNT_SID");
        let auth_token = take(
            self.auth_token.as_ref().map(|t| t.expose_secret()),
            "TWILIO_AUTH_TOKEN",
        );
        let from_number = take(self.from_number.as_deref(), "TWILIO_PHONE_NUMBER");
        let recipient_number = take(self.recipient_number.as_deref(), "RECIPIENT_PHONE_NUMBER");

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(TwilioCredentials {
            account_sid,
            auth_token: SecretString::from(auth_token),
            from_number,
            recipient_number,
            api_base: self.api_base.clone(),
        })
    }
}

pub struct Config {
    pub bind_addr: SocketAddr,
    pub cron_secret: String,
    pub twilio: TwilioSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Values are trimmed and
    /// empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BotError> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let raw_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|_| BotError::InvalidBindAddr(raw_addr.clone()))?;

        let cron_secret = match var("CRON_SECRET") {
            Some(secret) => secret,
            None => {
                warn!("CRON_SECRET is not set, falling back to the default secret");
                DEFAULT_CRON_SECRET.to_string()
            }
        };

        let twilio = TwilioSettings {
            account_sid: var("TWILIO_ACCOUNT_SID"),
            auth_token: var("TWILIO_AUTH_TOKEN").map(SecretString::from),
            from_number: var("TWILIO_PHONE_NUMBER"),
            recipient_number: var("RECIPIENT_PHONE_NUMBER"),
            api_base: var("TWILIO_API_BASE").unwrap_or_else(|| DEFAULT_TWILIO_API_BASE.to_string()),
        };

        Ok(Self {
            bind_addr,
            cron_secret,
            twilio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, BotError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cron_secret, "default-secret");
        assert_eq!(config.twilio.api_base, "https://api.twilio.com");
        assert!(config.twilio.account_sid.is_none());
        assert!(config.twilio.auth_token.is_none());
    }

    #[test]
    fn test_values_are_trimmed_and_blank_means_unset() {
        let config = config_from(&[
            ("CRON_SECRET", "  abc \n"),
            ("TWILIO_ACCOUNT_SID", "   "),
            ("TWILIO_PHONE_NUMBER", " +15550001111 "),
            ("BIND_ADDR", " 0.0.0.0:8080 "),
        ])
        .unwrap();

        assert_eq!(config.cron_secret, "abc");
        assert!(config.twilio.account_sid.is_none());
        assert_eq!(config.twilio.from_number.as_deref(), Some("+15550001111"));
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_empty_cron_secret_falls_back() {
        let config = config_from(&[("CRON_SECRET", "")]).unwrap();
        assert_eq!(config.cron_secret, "default-secret");
    }

    #[test]
    fn test_bad_bind_addr_is_rejected() {
        match config_from(&[("BIND_ADDR", "nope")]) {
            Err(BotError::InvalidBindAddr(addr)) => assert_eq!(addr, "nope"),
            Err(other) => panic!("expected InvalidBindAddr, got {}", other),
            Ok(_) => panic!("expected InvalidBindAddr"),
        }
    }

    #[test]
    fn test_credentials_report_every_missing_setting() {
        let settings = TwilioSettings {
            account_sid: Some("AC123".to_string()),
            from_number: Some("+15550001111".to_string()),
            ..Default::default()
        };

        let missing = settings.credentials().unwrap_err();
        assert_eq!(missing, vec!["TWILIO_AUTH_TOKEN", "RECIPIENT_PHONE_NUMBER"]);
    }

    #[test]
    fn test_credentials_when_complete() {
        let settings = TwilioSettings {
            account_sid: Some("AC123".to_string()),
            auth_token: Some(SecretString::from("token".to_string())),
            from_number: Some("+15550001111".to_string()),
            recipient_number: Some("+15552223333".to_string()),
            api_base: "https://api.twilio.com".to_string(),
        };

        let creds = settings.credentials().unwrap();
        assert_eq!(creds.account_sid, "AC123");
        assert_eq!(creds.auth_token.expose_secret(), "token");
        assert_eq!(creds.recipient_number, "+15552223333");
    }

    #[test]
    fn test_debug_output_hides_auth_token() {
        let settings = TwilioSettings {
            auth_token: Some(SecretString::from("super-secret-token".to_string())),
            ..Default::default()
        };
        let creds = TwilioCredentials {
            account_sid: "AC123".to_string(),
            auth_token: SecretString::from("super-secret-token".to_string()),
            from_number: String::new(),
            recipient_number: String::new(),
            api_base: String::new(),
        };

        assert!(!format!("{:?}", settings).contains("super-secret-token"));
        assert!(!format!("{:?}", creds).contains("super-secret-token"));
    }
}
