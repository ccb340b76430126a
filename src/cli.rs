use clap::{Args, Parser, Subcommand};

/// Send macOS user notifications from the command line
///
/// A thin wrapper around terminal-notifier.
/// Every option maps to exactly one terminal-notifier flag.
///
/// Based on pync at <https://github.com/SeTeM/pync>
#[derive(Parser)]
#[clap(disable_help_subcommand = true)]
#[clap(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
    /// Log every terminal-notifier invocation
    #[clap(long, short, global = true)]
    pub verbose: bool,
    /// Only log errors
    #[clap(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Deliver a notification
    ///
    /// Prints whatever terminal-notifier prints
    /// and exits with terminal-notifier's exit code.
    ///
    /// Options left unset fall back to the `[defaults]` table
    /// of ~/.config/pync/pync.toml, if any.
    Notify {
        /// The notification's message
        message: String,
        #[command(flatten)]
        options: NotifyArgs,
    },

    /// List delivered notifications
    ///
    /// Output is formatted as a table with one row per notification.
    ///
    /// When using `--json`, output will be in the form:
    ///
    /// {
    ///   "build": {
    ///     "group": "build",
    ///     "title": "Cargo",
    ///     "subtitle": null,
    ///     "message": "Build finished",
    ///     "delivered_at": "2013-06-16 14:43:52 +0000"
    ///   },
    ///   ...
    /// }
    #[clap(verbatim_doc_comment)]
    List {
        /// Group ID to list, `ALL` for every group
        #[clap(default_value = "ALL")]
        group: String,
        /// Output notifications as json
        #[clap(long)]
        json: bool,
    },

    /// Remove delivered notifications
    ///
    /// Exits with terminal-notifier's exit code.
    /// Removing a group that has no notifications succeeds.
    Remove {
        /// Group ID to remove, `ALL` for every group
        #[clap(default_value = "ALL")]
        group: String,
    },

    /// Show a test notification
    Test,
}

#[derive(Clone, Debug, Default, Args)]
pub struct NotifyArgs {
    /// Title of the notification
    #[clap(long)]
    pub title: Option<String>,
    /// Subtitle of the notification
    #[clap(long)]
    pub subtitle: Option<String>,
    /// Group ID, only one notification per group is shown at a time
    #[clap(long)]
    pub group: Option<String>,
    /// Name of a sound to play, `default` for the default sound
    #[clap(long)]
    pub sound: Option<String>,
    /// Bundle identifier of an application to activate on click
    #[clap(long)]
    pub activate: Option<String>,
    /// URL to open on click
    #[clap(long)]
    pub open: Option<String>,
    /// Shell command to run on click
    #[clap(long)]
    pub execute: Option<String>,
    /// Show the notification as a reply type alert
    #[clap(long)]
    pub reply: bool,
    /// Seconds before the notification closes itself
    #[clap(long)]
    pub timeout: Option<u32>,
    /// Bundle identifier of the application to impersonate
    #[clap(long)]
    pub sender: Option<String>,
    /// Path or URL of an image to use as the app icon
    #[clap(long)]
    pub app_icon: Option<String>,
    /// Path or URL of an image attached to the notification
    #[clap(long)]
    pub content_image: Option<String>,
}
