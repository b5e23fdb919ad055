//! Notification module for appforge
//!
//! Provides the toast queue: any action in the application can post a
//! transient message, and each one expires on its own timer.

mod notification_render;
mod notification_state;

pub use notification_render::render_notifications;
pub use notification_state::{Notification, NotificationId, NotificationQueue, Severity};
