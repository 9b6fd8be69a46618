//! Mail dispatch through SES.

use async_trait::async_trait;
use aws_sdk_sesv2::error::DisplayErrorContext;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client;
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::EmailMessage;

const CHARSET: &str = "UTF-8";

/// Delivers rendered notifications.
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Send `email`, returning the provider's message ID.
    async fn send_email(&self, email: &EmailMessage) -> Result<String>;
}

/// SES v2 sender using the ambient service credentials.
pub struct SesMailSender {
    client: Client,
    from_address: String,
}

impl SesMailSender {
    pub fn new(client: Client, from_address: impl Into<String>) -> Self {
        Self {
            client,
            from_address: from_address.into(),
        }
    }

    pub async fn connect(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config), config.mail_sender.clone())
    }
}

fn utf8_content(data: &str, part: &str) -> Result<Content> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|e| Error::MailDispatch(format!("failed to build {}: {}", part, e)))
}

#[async_trait]
impl MailSender for SesMailSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<String> {
        let destination = Destination::builder().to_addresses(&email.to).build();

        let content = EmailContent::builder()
            .simple(
                Message::builder()
                    .subject(utf8_content(&email.subject, "subject")?)
                    .body(
                        Body::builder()
                            .text(utf8_content(&email.body, "text body")?)
                            .build(),
                    )
                    .build(),
            )
            .build();

        let output = self
            .client
            .send_email()
            .from_email_address(&self.from_address)
            .destination(destination)
            .content(content)
            .send()
            .await
            .map_err(|e| Error::MailDispatch(DisplayErrorContext(&e).to_string()))?;

        let message_id = output.message_id().unwrap_or_default().to_string();
        info!(message_id = %message_id, "email accepted by SES");
        Ok(message_id)
    }
}
