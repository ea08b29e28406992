//! AWS SNS notification sender
//!
//! Publishes the status notification to the target ARN with the company id
//! as a message attribute. Throttling and service errors are retried with
//! exponential backoff; validation errors are not.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::config::Region;
use aws_sdk_sns::types::MessageAttributeValue;
use aws_sdk_sns::Client as SnsClient;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use gc_core::domain::entities::notification::Notification;
use gc_core::services::NotificationSender;

const INITIAL_RETRY_DELAY_MS: u64 = 500;

pub struct SnsNotificationSender {
    client: SnsClient,
    max_attempts: u32,
}

impl SnsNotificationSender {
    /// Build a client for `region` using the default AWS credential chain
    pub async fn new(region: String, max_attempts: u32) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .load()
            .await;

        info!(region = %region, "AWS SNS notification sender initialized");

        Self {
            client: SnsClient::new(&aws_config),
            max_attempts: max_attempts.max(1),
        }
    }

    async fn publish_with_retry(&self, notification: &Notification) -> Result<String, String> {
        let company_attribute = MessageAttributeValue::builder()
            .data_type("String")
            .string_value(notification.company_id.to_string())
            .build()
            .map_err(|e| format!("Invalid message attribute: {}", e))?;

        let mut attempts = 0;
        let mut delay = Duration::from_millis(INITIAL_RETRY_DELAY_MS);

        loop {
            attempts += 1;
            debug!(attempt = attempts, max_attempts = self.max_attempts, "Publishing to SNS");

            let result = self
                .client
                .publish()
                .target_arn(&notification.target_arn)
                .subject(&notification.title)
                .message(&notification.body)
                .message_attributes("companyId", company_attribute.clone())
                .send()
                .await;

            match result {
                Ok(response) => {
                    let message_id = response.message_id().unwrap_or("unknown").to_string();
                    return Ok(message_id);
                }
                Err(e) => {
                    let error_msg = e.to_string();
                    error!(attempt = attempts, error = %error_msg, "SNS publish failed");

                    if attempts >= self.max_attempts {
                        return Err(format!("SNS publish failed after {} attempts: {}", attempts, error_msg));
                    }
                    if error_msg.contains("InvalidParameter")
                        || error_msg.contains("NotFound")
                        || error_msg.contains("AuthorizationError")
                    {
                        return Err(format!("SNS rejected the request: {}", error_msg));
                    }

                    warn!("Retrying SNS publish after {:?}", delay);
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

#[async_trait]
impl NotificationSender for SnsNotificationSender {
    async fn send_notification(&self, notification: &Notification) -> Result<String, String> {
        self.publish_with_retry(notification).await
    }

    fn provider_name(&self) -> &str {
        "AWS SNS"
    }
}
