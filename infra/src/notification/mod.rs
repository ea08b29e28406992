//! Push notification senders
//!
//! - **AWS SNS**: publishes to the configured topic/endpoint ARN (feature `aws-sns`)
//! - **Log**: writes the notification to the log, for development

pub mod log_sender;

#[cfg(feature = "aws-sns")]
pub mod aws_sns;


use async_trait::async_trait;
use gc_core::domain::entities::notification::Notification;
use gc_core::services::NotificationSender;
use gc_shared::config::{NotificationConfig, NotificationProvider};

pub use log_sender::LogNotificationSender;

#[cfg(feature = "aws-sns")]
pub use aws_sns::SnsNotificationSender;

/// Sender selected at startup from configuration
pub struct NotificationSenderAdapter {
    inner: Box<dyn NotificationSender>,
}

impl NotificationSenderAdapter {
    pub fn new(inner: Box<dyn NotificationSender>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl NotificationSender for NotificationSenderAdapter {
    async fn send_notification(&self, notification: &Notification) -> Result<String, String> {
        self.inner.send_notification(notification).await
    }

    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

/// Create the notification sender named by the configuration
///
/// Falls back to the log sender when SNS cannot be initialized.
pub async fn create_notification_sender(config: &NotificationConfig) -> NotificationSenderAdapter {
    match config.provider {
        #[cfg(feature = "aws-sns")]
        NotificationProvider::Sns => NotificationSenderAdapter::new(Box::new(
            SnsNotificationSender::new(config.region.clone(), config.max_attempts).await,
        )),
        #[cfg(not(feature = "aws-sns"))]
        NotificationProvider::Sns => {
            tracing::warn!("Built without the aws-sns feature, notifications will only be logged");
            NotificationSenderAdapter::new(Box::new(LogNotificationSender::new()))
        }
        NotificationProvider::Log => NotificationSenderAdapter::new(Box::new(LogNotificationSender::new())),
    }
}
