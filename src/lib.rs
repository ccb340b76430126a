//! Send macOS user notifications through [terminal-notifier](https://github.com/julienXX/terminal-notifier).
//!
//! ```no_run
//! use pync::{GroupId, NotifyOptions};
//!
//! # fn main() -> pync::Result<()> {
//! pync::notify("Hello World", &NotifyOptions::new().title("Rust"))?;
//! pync::notify("Hello World", &NotifyOptions::new().group(std::process::id()))?;
//! pync::notify("Hello World", &NotifyOptions::new().open("http://github.com/"))?;
//!
//! let delivered = pync::list_notifications(&GroupId::from(std::process::id()))?;
//! pync::remove_notifications(&GroupId::all())?;
//! # Ok(())
//! # }
//! ```
//!
//! The free functions look up terminal-notifier on every call.
//! Construct a [`TerminalNotifier`] once to avoid that.
//!
//! The free functions and [`TerminalNotifier::new`] read the user's config file
//! through [`ConfigFile::load`], which writes a default `pync.toml` to the
//! platform config directory the first time it runs.
//! Use [`TerminalNotifier::with_path`] or [`TerminalNotifier::from_config`]
//! to leave the filesystem untouched.

pub mod cli;
mod common;
mod config;
mod error;
mod notifier;

pub use common::{
    notifications_table, render_table, Action, GroupId, ListedNotification,
    NotificationId, Notifications, NotifyOptions, LIST_HEADER,
};
pub use config::ConfigFile;
pub use error::{Error, Result};
pub use notifier::{Outcome, TerminalNotifier, TERMINAL_NOTIFIER_VERSION};

use std::process::ExitStatus;

/// Send a notification, see [`TerminalNotifier::notify`]
///
/// Creates the default config file if there is none yet.
#[mutants::skip] // Cannot test directly, depends on system state
pub fn notify(message: &str, options: &NotifyOptions) -> Result<Outcome> {
    TerminalNotifier::new()?.notify(message, options)
}

/// List delivered notifications, see [`TerminalNotifier::list`]
///
/// Creates the default config file if there is none yet.
#[mutants::skip] // Cannot test directly, depends on system state
pub fn list_notifications(group: &GroupId) -> Result<Notifications> {
    TerminalNotifier::new()?.list(group)
}

/// Remove delivered notifications, see [`TerminalNotifier::remove`]
///
/// Creates the default config file if there is none yet.
#[mutants::skip] // Cannot test directly, depends on system state
pub fn remove_notifications(group: &GroupId) -> Result<ExitStatus> {
    TerminalNotifier::new()?.remove(group)
}
