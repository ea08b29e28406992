use async_trait::async_trait;

use crate::domain::entities::notification::Notification;

/// Trait for push notification providers
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Publish a notification and return the provider's message id
    async fn send_notification(&self, notification: &Notification) -> Result<String, String>;

    /// Name of the provider, for logs
    fn provider_name(&self) -> &str;
}
