mod action;
mod listing;
mod options;
mod table;

pub use action::Action;
pub use listing::{
    notifications_table, ListedNotification, NotificationId, Notifications,
    LIST_HEADER,
};
pub use options::{GroupId, NotifyOptions};
pub use table::render_table;
