use crate::{
    common::{Action, GroupId, Notifications, NotifyOptions},
    config::ConfigFile,
    error::{Error, Result},
};
use std::{
    env,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Output, Stdio},
    str::FromStr,
};
use tracing::{debug, warn};

/// Version of terminal-notifier whose flags and output this crate speaks
pub const TERMINAL_NOTIFIER_VERSION: &str = "1.6.1";

const BIN_NAME: &str = "terminal-notifier";
const USR_LOCAL_BIN: &str = "/usr/local/bin/terminal-notifier";

/// Captured result of a single terminal-notifier invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Exit status. terminal-notifier encodes click and timeout results here
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    /// Exit code of the process, if it was not killed by a signal
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }
}

impl From<Output> for Outcome {
    fn from(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Handle to a terminal-notifier executable.
///
/// Holds nothing but the executable's location and how to spawn it,
/// so a single instance can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalNotifier {
    /// Path of the terminal-notifier executable
    bin_path: PathBuf,
    /// Options used for anything a notification leaves unset
    defaults: NotifyOptions,
    /// Working directory of the child, inherited when unset
    current_dir: Option<PathBuf>,
    /// Extra environment variables for the child
    envs: Vec<(OsString, OsString)>,
}

impl TerminalNotifier {
    /// Find terminal-notifier using the user's config file.
    /// Creates the default config file if there is none yet.
    #[mutants::skip] // Cannot test directly, depends on system state
    pub fn new() -> Result<Self> {
        Self::from_config(&ConfigFile::load()?)
    }

    /// Find terminal-notifier, preferring the path set in the given config
    pub fn from_config(config: &ConfigFile) -> Result<Self> {
        if !Self::is_available() {
            return Err(Error::UnsupportedPlatform);
        }

        let bin_path = match &config.terminal_notifier {
            Some(path) => path.clone(),
            None => Self::locate()?,
        };

        Ok(Self::with_path(bin_path)?.with_defaults(config.defaults.clone()))
    }

    /// Use the executable at the given path, skipping discovery and the platform check
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let bin_path = path.into();
        check_executable(&bin_path)?;

        Ok(Self {
            bin_path,
            defaults: NotifyOptions::default(),
            current_dir: None,
            envs: Vec::new(),
        })
    }

    /// Set options applied to notifications that do not set them
    pub fn with_defaults(mut self, defaults: NotifyOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Run terminal-notifier in the given directory
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Add an environment variable for terminal-notifier
    pub fn env(
        mut self,
        key: impl Into<OsString>,
        value: impl Into<OsString>,
    ) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn bin_path(&self) -> &Path {
        &self.bin_path
    }

    /// Whether terminal-notifier can run on this platform.
    /// Notification Center exists since Mac OS X 10.8, older than anything Rust targets.
    pub fn is_available() -> bool {
        cfg!(target_os = "macos")
    }

    /// Search for terminal-notifier on `PATH`, then in `/usr/local/bin`,
    /// then for a copy bundled next to the running executable
    #[mutants::skip] // Cannot test directly, depends on system state
    pub fn locate() -> Result<PathBuf> {
        search_path()
            .or_else(|| {
                let path = PathBuf::from(USR_LOCAL_BIN);
                path.is_file().then_some(path)
            })
            .or_else(|| bundled_path().filter(|path| path.is_file()))
            .ok_or_else(|| Error::ExecutableNotFound {
                path: PathBuf::from(BIN_NAME),
                reason: format!(
                    "not found on PATH, in /usr/local/bin or bundled with {}",
                    env!("CARGO_PKG_NAME")
                ),
            })
    }

    /// Send a notification.
    ///
    /// A non-zero exit status is not an error: terminal-notifier uses it to
    /// report how the user dealt with the notification.
    pub fn notify(
        &self,
        message: &str,
        options: &NotifyOptions,
    ) -> Result<Outcome> {
        let options = options.clone().or(&self.defaults);
        let outcome = self.execute(&Action::Notify {
            message,
            options: &options,
        })?;

        if !outcome.success() {
            warn!(
                status = %outcome.status,
                stderr = outcome.stderr.trim(),
                "terminal-notifier exited unsuccessfully"
            );
        }

        Ok(outcome)
    }

    /// List delivered notifications of a group, or of every group with [`GroupId::all`]
    pub fn list(&self, group: &GroupId) -> Result<Notifications> {
        let outcome = self.execute(&Action::List(group))?;

        if !outcome.success() {
            return Err(Error::ToolFailure {
                status: outcome.status,
                stderr: outcome.stderr.trim().to_owned(),
            });
        }

        Notifications::from_str(&outcome.stdout)
    }

    /// Remove delivered notifications of a group, or of every group with [`GroupId::all`]
    pub fn remove(&self, group: &GroupId) -> Result<ExitStatus> {
        Ok(self.execute(&Action::Remove(group))?.status)
    }

    /// The executable and arguments that would be run for an action
    pub fn command_line(
        &self,
        action: &Action,
    ) -> Result<(PathBuf, Vec<String>)> {
        Ok((self.bin_path.clone(), action.args()?))
    }

    /// Run terminal-notifier for an action and wait for it to exit
    pub fn execute(&self, action: &Action) -> Result<Outcome> {
        let args = action.args()?;
        debug!(bin = %self.bin_path.display(), ?args, "running terminal-notifier");

        let mut cmd = Command::new(&self.bin_path);
        cmd.args(&args)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null());
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        let outcome = Outcome::from(cmd.output().map_err(|e| {
            match e.kind() {
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                    Error::ExecutableNotFound {
                        path: self.bin_path.clone(),
                        reason: e.to_string(),
                    }
                }
                _ => e.into(),
            }
        })?);

        debug!(status = %outcome.status, "terminal-notifier exited");
        Ok(outcome)
    }
}

/// Ensure the given path is an executable file
fn check_executable(path: &Path) -> Result<()> {
    let not_found = |reason: String| Error::ExecutableNotFound {
        path: path.to_owned(),
        reason,
    };

    let metadata = fs::metadata(path).map_err(|e| not_found(e.to_string()))?;

    if !metadata.is_file() {
        return Err(not_found("not a file".to_owned()));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(not_found("not executable".to_owned()));
        }
    }

    Ok(())
}

/// First terminal-notifier on `PATH`, with symlinks resolved
fn search_path() -> Option<PathBuf> {
    env::split_paths(&env::var_os("PATH")?)
        .map(|dir| dir.join(BIN_NAME))
        .find(|path| path.is_file())
        .and_then(|path| fs::canonicalize(path).ok())
}

/// Where a copy of terminal-notifier shipped alongside the running executable lives
fn bundled_path() -> Option<PathBuf> {
    let mut path = env::current_exe().ok()?.parent()?.to_path_buf();
    path.push(format!("vendor/terminal-notifier-{TERMINAL_NOTIFIER_VERSION}"));
    path.push("terminal-notifier.app/Contents/MacOS/terminal-notifier");
    Some(path)
}
