use gc_shared::config::NotificationConfig;

/// Configuration for the company service
#[derive(Debug, Clone, Default)]
pub struct CompanyServiceConfig {
    /// Destination of approval/rejection notifications; none disables them
    pub notification_target_arn: Option<String>,
}

impl From<&NotificationConfig> for CompanyServiceConfig {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            notification_target_arn: config.target_arn.clone(),
        }
    }
}
