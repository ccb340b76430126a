use crate::cli::NotifyArgs;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::{convert::Infallible, str::FromStr};

/// Opaque tag used by terminal-notifier to list or remove notifications in batches
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Deref,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(from = "RawGroupId", into = "String")]
pub struct GroupId(String);

impl GroupId {
    /// Reserved value meaning every group
    pub const ALL: &'static str = "ALL";

    /// The group id that matches all notifications
    pub fn all() -> Self {
        Self(Self::ALL.to_owned())
    }

    /// Whether this is the reserved value for all groups
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for GroupId {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<GroupId> for String {
    fn from(group: GroupId) -> Self {
        group.0
    }
}

// Numeric ids (e.g. a process id) are stringified
macro_rules! group_id_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for GroupId {
                fn from(id: $int) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

group_id_from_int!(i32, i64, u32, u64, usize);

/// Group ids in the config file may be written as strings or integers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawGroupId {
    Text(String),
    Number(i64),
}

impl From<RawGroupId> for GroupId {
    fn from(raw: RawGroupId) -> Self {
        match raw {
            RawGroupId::Text(s) => s.into(),
            RawGroupId::Number(n) => n.into(),
        }
    }
}

/// Optional settings for a single notification.
///
/// Every field corresponds to exactly one terminal-notifier flag.
/// Unset fields are left off the command line entirely.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotifyOptions {
    /// Title of the notification, `-title`
    pub title: Option<String>,
    /// Subtitle of the notification, `-subtitle`
    pub subtitle: Option<String>,
    /// Group the notification belongs to, `-group`.
    /// Only one notification per group is shown at a time.
    pub group: Option<GroupId>,
    /// Name of a system sound to play, `-sound`.
    /// `default` plays the default notification sound.
    pub sound: Option<String>,
    /// Bundle identifier of an application to activate on click, `-activate`
    pub activate: Option<String>,
    /// URL to open on click, `-open`
    pub open: Option<String>,
    /// Shell command to run on click, `-execute`
    pub execute: Option<String>,
    /// Show the notification as a reply type alert, `-reply`
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub reply: bool,
    /// Seconds before the notification closes itself, `-timeout`
    pub timeout: Option<u32>,
    /// Bundle identifier of the application to impersonate, `-sender`
    pub sender: Option<String>,
    /// Path or URL of an image to use as the app icon, `-appIcon`
    pub app_icon: Option<String>,
    /// Path or URL of an image attached to the notification, `-contentImage`
    pub content_image: Option<String>,
}

impl NotifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn group(mut self, group: impl Into<GroupId>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    pub fn activate(mut self, bundle_id: impl Into<String>) -> Self {
        self.activate = Some(bundle_id.into());
        self
    }

    pub fn open(mut self, url: impl Into<String>) -> Self {
        self.open = Some(url.into());
        self
    }

    pub fn execute(mut self, command: impl Into<String>) -> Self {
        self.execute = Some(command.into());
        self
    }

    pub fn reply(mut self, reply: bool) -> Self {
        self.reply = reply;
        self
    }

    pub fn timeout(mut self, seconds: u32) -> Self {
        self.timeout = Some(seconds);
        self
    }

    pub fn sender(mut self, bundle_id: impl Into<String>) -> Self {
        self.sender = Some(bundle_id.into());
        self
    }

    pub fn app_icon(mut self, icon: impl Into<String>) -> Self {
        self.app_icon = Some(icon.into());
        self
    }

    pub fn content_image(mut self, image: impl Into<String>) -> Self {
        self.content_image = Some(image.into());
        self
    }

    /// Fill every unset field from `defaults`, keeping fields that are already set
    pub fn or(self, defaults: &NotifyOptions) -> Self {
        Self {
            title: self.title.or_else(|| defaults.title.clone()),
            subtitle: self.subtitle.or_else(|| defaults.subtitle.clone()),
            group: self.group.or_else(|| defaults.group.clone()),
            sound: self.sound.or_else(|| defaults.sound.clone()),
            activate: self.activate.or_else(|| defaults.activate.clone()),
            open: self.open.or_else(|| defaults.open.clone()),
            execute: self.execute.or_else(|| defaults.execute.clone()),
            reply: self.reply || defaults.reply,
            timeout: self.timeout.or(defaults.timeout),
            sender: self.sender.or_else(|| defaults.sender.clone()),
            app_icon: self.app_icon.or_else(|| defaults.app_icon.clone()),
            content_image: self
                .content_image
                .or_else(|| defaults.content_image.clone()),
        }
    }

    /// Command line flags for the set fields, in terminal-notifier's documented order
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        push_flag(&mut args, "-title", self.title.as_ref());
        push_flag(&mut args, "-subtitle", self.subtitle.as_ref());
        push_flag(&mut args, "-group", self.group.as_ref());
        push_flag(&mut args, "-sound", self.sound.as_ref());
        push_flag(&mut args, "-activate", self.activate.as_ref());
        push_flag(&mut args, "-open", self.open.as_ref());
        push_flag(&mut args, "-execute", self.execute.as_ref());
        if self.reply {
            args.push("-reply".to_owned());
        }
        push_flag(&mut args, "-timeout", self.timeout.as_ref());
        push_flag(&mut args, "-sender", self.sender.as_ref());
        push_flag(&mut args, "-appIcon", self.app_icon.as_ref());
        push_flag(&mut args, "-contentImage", self.content_image.as_ref());

        args
    }
}

/// Push a flag and its value if the value is present
fn push_flag<T: ToString>(args: &mut Vec<String>, flag: &str, value: Option<&T>) {
    if let Some(value) = value {
        args.push(flag.to_owned());
        args.push(value.to_string());
    }
}

impl From<NotifyArgs> for NotifyOptions {
    fn from(args: NotifyArgs) -> Self {
        Self {
            title: args.title,
            subtitle: args.subtitle,
            group: args.group.map(GroupId::from),
            sound: args.sound,
            activate: args.activate,
            open: args.open,
            execute: args.execute,
            reply: args.reply,
            timeout: args.timeout,
            sender: args.sender,
            app_icon: args.app_icon,
            content_image: args.content_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    #[test]
    fn numeric_group_ids_are_stringified() {
        assert_eq!(GroupId::from(4242_u32).to_string(), "4242");
        assert_eq!(GroupId::from(-7_i64).as_str(), "-7");
        assert!(GroupId::default().is_all());
        assert!(!GroupId::from("build").is_all());
    }

    #[test]
    fn all_options_in_order() {
        let options = NotifyOptions::new()
            .content_image("/tmp/cat.png")
            .app_icon("/tmp/icon.png")
            .sender("com.apple.Safari")
            .timeout(10)
            .reply(true)
            .execute("say \"OMG\"")
            .open("http://github.com/")
            .activate("com.apple.Safari")
            .sound("Ping")
            .group(42)
            .subtitle("Greetings")
            .title("Python");

        assert_eq!(
            options.to_args(),
            [
                "-title",
                "Python",
                "-subtitle",
                "Greetings",
                "-group",
                "42",
                "-sound",
                "Ping",
                "-activate",
                "com.apple.Safari",
                "-open",
                "http://github.com/",
                "-execute",
                "say \"OMG\"",
                "-reply",
                "-timeout",
                "10",
                "-sender",
                "com.apple.Safari",
                "-appIcon",
                "/tmp/icon.png",
                "-contentImage",
                "/tmp/cat.png",
            ]
        );
    }

    #[test]
    fn unset_options_emit_nothing() {
        assert!(NotifyOptions::new().to_args().is_empty());
        assert!(NotifyOptions::new().reply(false).to_args().is_empty());
    }

    #[test]
    fn one_flag_per_option() {
        let args = NotifyOptions::new()
            .title("a")
            .sound("default")
            .timeout(3)
            .to_args();

        for flag in ["-title", "-sound", "-timeout"] {
            assert_eq!(args.iter().filter(|a| *a == flag).count(), 1);
        }
        assert_eq!(args.len(), 6);
    }

    #[test]
    fn defaults_fill_only_unset_fields() {
        let defaults = NotifyOptions::new()
            .title("Default")
            .sender("com.apple.Terminal")
            .timeout(5);

        let merged = NotifyOptions::new().title("Python").or(&defaults);

        assert_eq!(
            merged,
            NotifyOptions::new()
                .title("Python")
                .sender("com.apple.Terminal")
                .timeout(5)
        );
    }

    #[test]
    fn group_id_from_config_integer() -> Result<()> {
        let options: NotifyOptions =
            serde_json::from_str(r#"{"group": 42, "reply": true}"#)?;
        assert_eq!(options.group, Some(GroupId::from("42")));
        assert!(options.reply);
        Ok(())
    }

    #[test]
    fn unknown_option_rejected() {
        let options =
            serde_json::from_str::<NotifyOptions>(r#"{"colour": "red"}"#);
        assert!(options.is_err());
    }

    #[test]
    fn serialize_skips_unset() -> Result<()> {
        let json = serde_json::to_string(
            &NotifyOptions::new().title("Python").group("build"),
        )?;
        assert_eq!(json, r#"{"title":"Python","group":"build"}"#);
        Ok(())
    }
}
