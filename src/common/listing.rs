use crate::{
    common::{render_table, GroupId},
    error::{Error, Result},
};
use chrono::{DateTime, FixedOffset};
use derive_more::Deref;
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    io::Write,
    str::FromStr,
};
use tabled::Tabled;

/// First line printed by `terminal-notifier -list` when anything was delivered
pub const LIST_HEADER: &str = "GroupID\tTitle\tSubtitle\tMessage\tDelivered At";

/// How terminal-notifier prints a missing value
const NULL: &str = "(null)";

/// How terminal-notifier prints delivery dates, e.g. `2013-06-16 14:43:52 +0000`
const DELIVERED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// A notification still present in Notification Center
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedNotification {
    pub group: Option<GroupId>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub message: String,
    #[serde(serialize_with = "serialize_delivered_at")]
    pub delivered_at: DateTime<FixedOffset>,
}

impl ListedNotification {
    /// Parse a single tab-separated row of list output.
    /// The message is printed raw and may itself contain tabs,
    /// so it is whatever sits between the subtitle and the date.
    fn from_row(row: &str) -> Result<Self, String> {
        let mut columns = row.splitn(4, '\t');
        let (Some(group), Some(title), Some(subtitle), Some(rest)) = (
            columns.next(),
            columns.next(),
            columns.next(),
            columns.next(),
        ) else {
            return Err(format!(
                "expected at least 5 tab-separated columns, found {}",
                row.split('\t').count()
            ));
        };

        let Some((message, delivered_at)) = rest.rsplit_once('\t') else {
            return Err(format!(
                "expected at least 5 tab-separated columns, found {}",
                row.split('\t').count()
            ));
        };

        let delivered_at =
            DateTime::parse_from_str(delivered_at, DELIVERED_AT_FORMAT)
                .map_err(|e| {
                    format!("bad delivery date '{delivered_at}': {e}")
                })?;

        Ok(Self {
            group: non_null(group).map(GroupId::from),
            title: non_null(title).map(str::to_owned),
            subtitle: non_null(subtitle).map(str::to_owned),
            message: message.to_owned(),
            delivered_at,
        })
    }
}

fn non_null(column: &str) -> Option<&str> {
    (column != NULL).then_some(column)
}

fn serialize_delivered_at<S: Serializer>(
    delivered_at: &DateTime<FixedOffset>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&delivered_at.format(DELIVERED_AT_FORMAT))
}

/// Key of a delivered notification
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationId {
    /// The notification's group id
    Group(GroupId),
    /// 1-based position among the rows of a notification delivered without a group
    Ungrouped(usize),
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Group(group) => f.write_str(group),
            Self::Ungrouped(row) => write!(f, "#{row}"),
        }
    }
}

impl From<&str> for NotificationId {
    fn from(group: &str) -> Self {
        Self::Group(group.into())
    }
}

impl Serialize for NotificationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Delivered notifications, keyed by notification id
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Serialize)]
#[serde(transparent)]
pub struct Notifications(BTreeMap<NotificationId, ListedNotification>);

impl FromStr for Notifications {
    type Err = Error;
    /// Parse the output of `terminal-notifier -list`.
    /// Empty output means nothing was delivered.
    fn from_str(output: &str) -> Result<Self, Self::Err> {
        let mut lines = output
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
            .filter(|(_, line)| !line.trim().is_empty());

        let Some((line, header)) = lines.next() else {
            return Ok(Self::default());
        };

        if header != LIST_HEADER {
            return Err(Error::OutputParse {
                line,
                reason: format!(
                    "expected header '{}', found '{}'",
                    LIST_HEADER.escape_default(),
                    header.escape_default()
                ),
            });
        }

        let mut notifications = BTreeMap::new();

        for (row, (line, text)) in lines.enumerate() {
            let notification = ListedNotification::from_row(text)
                .map_err(|reason| Error::OutputParse { line, reason })?;

            let id = notification.group.clone().map_or(
                NotificationId::Ungrouped(row + 1),
                NotificationId::Group,
            );

            if notifications.insert(id.clone(), notification).is_some() {
                return Err(Error::OutputParse {
                    line,
                    reason: format!("duplicate notification id '{id}'"),
                });
            }
        }

        Ok(Self(notifications))
    }
}

/// Internal helper struct for turning Notifications into tabular data
#[derive(Tabled)]
struct NotificationRow<'a> {
    id: String,
    title: &'a str,
    subtitle: &'a str,
    message: &'a str,
    #[tabled(rename = "delivered at")]
    delivered_at: String,
}

impl<'a> NotificationRow<'a> {
    fn new(id: &NotificationId, notification: &'a ListedNotification) -> Self {
        Self {
            id: id.to_string(),
            title: notification.title.as_deref().unwrap_or_default(),
            subtitle: notification.subtitle.as_deref().unwrap_or_default(),
            message: &notification.message,
            delivered_at: notification
                .delivered_at
                .format(DELIVERED_AT_FORMAT)
                .to_string(),
        }
    }
}

/// Render a table of delivered notifications
/// and write it to the given writer
pub fn notifications_table<W: Write>(
    writer: &mut W,
    notifications: &Notifications,
    output_json: bool,
    terminal_output: bool,
) -> Result<()> {
    let table = if output_json {
        serde_json::to_string(notifications)?
    } else {
        let rows = notifications
            .iter()
            .map(|(id, notification)| NotificationRow::new(id, notification))
            .collect_vec();
        render_table(&rows, terminal_output)
    };

    writeln!(writer, "{table}")?;

    Ok(())
}
