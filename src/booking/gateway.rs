use std::fmt;
use std::future::Future;

use serde::Serialize;

use super::types::FormData;
use crate::config::EmailConfig;

/// Delivers a validated booking to the operator.
///
/// Implementations make exactly one attempt per call. Input is assumed to have
/// passed validation already.
pub trait Gateway {
    fn send(&self, data: &FormData) -> impl Future<Output = Result<(), GatewayError>>;
}

#[derive(Debug)]
pub enum GatewayError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    Transport(reqwest::Error),
    /// The endpoint answered with a non-2xx status.
    Status { status: u16, body: String },
    /// The request was dropped before the gateway resolved.
    Cancelled,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Transport(e) => write!(f, "Email transport error: {e}"),
            GatewayError::Status { status, body } => {
                write!(f, "Email endpoint returned {status}: {body}")
            }
            GatewayError::Cancelled => write!(f, "Email request cancelled before completion"),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::Transport(e) => Some(e),
            GatewayError::Status { .. } | GatewayError::Cancelled => None,
        }
    }
}

/// Request body expected by the EmailJS send endpoint.
#[derive(Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub to_email: &'a str,
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub phone: &'a str,
    pub preferred_date: &'a str,
    pub message: &'a str,
}

impl<'a> EmailRequest<'a> {
    /// Values are copied verbatim; no trimming happens here.
    pub fn new(config: &'a EmailConfig, data: &'a FormData) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                to_email: &config.recipient,
                from_name: &data.name,
                from_email: &data.email,
                phone: &data.phone,
                preferred_date: &data.preferred_date,
                message: &data.message,
            },
        }
    }
}

/// Gateway backed by the EmailJS REST API.
#[derive(Clone)]
pub struct EmailJsGateway {
    client: reqwest::Client,
    config: EmailConfig,
}

impl EmailJsGateway {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl Gateway for EmailJsGateway {
    async fn send(&self, data: &FormData) -> Result<(), GatewayError> {
        let payload = EmailRequest::new(&self.config, data);
        log::debug!("Sending booking email to {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(GatewayError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
