use crate::{
    common::{GroupId, NotifyOptions},
    error::{Error, Result},
};

/// A single request to terminal-notifier.
/// Each variant corresponds to one of the tool's actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// Deliver a notification with the given message
    Notify {
        message: &'a str,
        options: &'a NotifyOptions,
    },
    /// List delivered notifications of a group, `-list`
    List(&'a GroupId),
    /// Remove delivered notifications of a group, `-remove`
    Remove(&'a GroupId),
}

impl Action<'_> {
    /// Build the argument list passed to terminal-notifier, excluding the executable itself
    pub fn args(&self) -> Result<Vec<String>> {
        match self {
            Self::Notify { message, options } => {
                if message.trim().is_empty() {
                    return Err(Error::InvalidArguments(
                        "a message is required unless listing or removing notifications"
                            .to_owned(),
                    ));
                }

                let mut args = vec!["-message".to_owned(), message.to_string()];
                args.extend(options.to_args());
                Ok(args)
            }
            Self::List(group) => Ok(vec!["-list".to_owned(), group_arg(group)?]),
            Self::Remove(group) => {
                Ok(vec!["-remove".to_owned(), group_arg(group)?])
            }
        }
    }
}

/// Group ids given to `-list` and `-remove` must not be empty,
/// terminal-notifier would otherwise swallow the next flag as the id
fn group_arg(group: &GroupId) -> Result<String> {
    if group.trim().is_empty() {
        Err(Error::InvalidArguments(
            "group id must not be empty, use 'ALL' for every group".to_owned(),
        ))
    } else {
        Ok(group.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_message() -> Result<()> {
        let options = NotifyOptions::default();
        let action = Action::Notify {
            message: "Hello World",
            options: &options,
        };

        assert_eq!(action.args()?, strings(&["-message", "Hello World"]));
        Ok(())
    }

    #[test]
    fn title_follows_message() -> Result<()> {
        let options = NotifyOptions::new().title("Python");
        let action = Action::Notify {
            message: "Hello World",
            options: &options,
        };

        assert_eq!(
            action.args()?,
            strings(&["-message", "Hello World", "-title", "Python"])
        );
        Ok(())
    }

    #[test]
    fn message_is_always_first() -> Result<()> {
        let options = NotifyOptions::new()
            .group(std::process::id())
            .sound("Ping")
            .reply(true);
        let args = Action::Notify {
            message: "Hello World",
            options: &options,
        }
        .args()?;

        assert_eq!(&args[..2], &strings(&["-message", "Hello World"])[..]);
        assert_eq!(args.iter().filter(|a| *a == "-message").count(), 1);
        Ok(())
    }

    #[test]
    fn empty_message_is_invalid() {
        let options = NotifyOptions::new().title("Python");

        for message in ["", "  \n"] {
            let res = Action::Notify {
                message,
                options: &options,
            }
            .args();
            assert!(matches!(res, Err(Error::InvalidArguments(_))));
        }
    }

    #[test]
    fn list_and_remove() -> Result<()> {
        let group = GroupId::from(4242);

        assert_eq!(Action::List(&group).args()?, strings(&["-list", "4242"]));
        assert_eq!(
            Action::Remove(&GroupId::all()).args()?,
            strings(&["-remove", "ALL"])
        );
        assert!(matches!(
            Action::Remove(&GroupId::from("")).args(),
            Err(Error::InvalidArguments(_))
        ));
        Ok(())
    }
}
