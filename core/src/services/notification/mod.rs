//! Outbound push notifications for company status changes

mod traits;

pub use traits::NotificationSender;
