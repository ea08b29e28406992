//! Push notification configuration

use serde::{Deserialize, Serialize};

/// Which sender dispatches company status notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationProvider {
    /// Publish to an AWS SNS topic or endpoint
    Sns,
    /// Only write the notification to the log
    #[default]
    Log,
}

impl std::str::FromStr for NotificationProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sns" | "aws" => Ok(NotificationProvider::Sns),
            "log" | "mock" => Ok(NotificationProvider::Log),
            _ => Err(format!("Unknown notification provider: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    pub provider: NotificationProvider,

    /// SNS target ARN that receives approval/rejection notifications
    #[serde(default)]
    pub target_arn: Option<String>,

    /// AWS region for the SNS client
    #[serde(default = "default_region")]
    pub region: String,

    /// Publish attempts before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            provider: NotificationProvider::default(),
            target_arn: None,
            region: default_region(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl NotificationConfig {
    pub fn from_env() -> Self {
        let provider = std::env::var("NOTIFICATION_PROVIDER")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default();

        Self {
            provider,
            target_arn: std::env::var("AWS_ARN").ok().filter(|arn| !arn.is_empty()),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| default_region()),
            max_attempts: std::env::var("NOTIFICATION_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_attempts),
        }
    }
}

fn default_region() -> String {
    String::from("us-east-1")
}

fn default_max_attempts() -> u32 {
    3
}
