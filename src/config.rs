use actix_web::cookie::Key;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
/// Operator inbox that receives every booking request.
pub const OPERATOR_EMAIL: &str = "drharshalmaheshgoel@gmail.com";

const MIN_SESSION_KEY_LEN: usize = 64;

/// Identifiers for the EmailJS account plus where to send bookings.
#[derive(Debug, Clone, Default)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
    pub recipient: String,
}

impl EmailConfig {
    /// Read `EMAILJS_*` and `BOOKING_RECIPIENT`. Missing identifiers become
    /// empty strings; the email service then rejects the request.
    pub fn from_env() -> Self {
        Self {
            service_id: required_var("EMAILJS_SERVICE_ID"),
            template_id: required_var("EMAILJS_TEMPLATE_ID"),
            public_key: required_var("EMAILJS_PUBLIC_KEY"),
            endpoint: optional_var("EMAILJS_ENDPOINT", DEFAULT_EMAILJS_ENDPOINT),
            recipient: optional_var("BOOKING_RECIPIENT", OPERATOR_EMAIL),
        }
    }
}

pub struct AppConfig {
    pub bind_addr: String,
    pub session_key: Key,
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }

        Self {
            bind_addr: optional_var("BIND_ADDR", DEFAULT_BIND_ADDR),
            session_key: session_key_from_env(),
            email: EmailConfig::from_env(),
        }
    }
}

// Session encryption key; persistent sessions across restarts need SESSION_KEY.
fn session_key_from_env() -> Key {
    match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= MIN_SESSION_KEY_LEN => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

fn required_var(name: &str) -> String {
    match std::env::var(name) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => {
            log::warn!("{name} is not set; booking emails will be rejected");
            String::new()
        }
    }
}

fn optional_var(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
