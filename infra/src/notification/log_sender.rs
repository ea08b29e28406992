//! Notification sender that only logs

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use gc_core::domain::entities::notification::Notification;
use gc_core::services::NotificationSender;

/// Logs each notification instead of publishing it
#[derive(Default)]
pub struct LogNotificationSender {
    sent: AtomicU64,
}

impl LogNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of notifications logged so far
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl NotificationSender for LogNotificationSender {
    async fn send_notification(&self, notification: &Notification) -> Result<String, String> {
        let sequence = self.sent.fetch_add(1, Ordering::Relaxed) + 1;

        tracing::info!(
            target_arn = %notification.target_arn,
            company_id = %notification.company_id,
            title = %notification.title,
            body = %notification.body,
            "Push notification (log only)"
        );

        Ok(format!("log-{}", sequence))
    }

    fn provider_name(&self) -> &str {
        "log"
    }
}
