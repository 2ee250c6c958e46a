//! Reusable widgets for the TUI

pub mod error_dialog;
pub mod input;
pub mod notification;

pub use error_dialog::{error_dialog_area, ErrorDialog, ErrorInfo};
pub use input::TextInput;
pub use notification::{
    notification_area, Notification, NotificationKind, NotificationQueue, NotificationWidget,
};
