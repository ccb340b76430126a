use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use pync::{
    cli::{Cli, Cmd},
    notifications_table, GroupId, NotifyOptions, Result, TerminalNotifier,
};
use std::{
    io::{IsTerminal, Write},
    process::{ExitCode, ExitStatus},
};
use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[mutants::skip] // Cannot test directly at the moment
fn main() -> Result<ExitCode> {
    CompleteEnv::with_factory(|| Cli::command().name("pync"))
        .completer("pync")
        .complete();

    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let notifier = TerminalNotifier::new()?;
    let mut stdout = std::io::stdout().lock();

    let code = match cli.cmd {
        Cmd::Notify { message, options } => {
            let outcome = notifier.notify(&message, &options.into())?;
            write!(stdout, "{}", outcome.stdout)?;
            exit_code(outcome.status)
        }
        Cmd::List { group, json } => {
            let terminal_output = stdout.is_terminal();
            notifications_table(
                &mut stdout,
                &notifier.list(&GroupId::from(group))?,
                json,
                terminal_output,
            )?;
            ExitCode::SUCCESS
        }
        Cmd::Remove { group } => {
            exit_code(notifier.remove(&GroupId::from(group))?)
        }
        Cmd::Test => {
            let outcome = notifier.notify(
                &format!("Notification from {}", env!("CARGO_PKG_NAME")),
                &NotifyOptions::new().open(env!("CARGO_PKG_REPOSITORY")),
            )?;
            exit_code(outcome.status)
        }
    };

    Ok(code)
}

/// Pass terminal-notifier's exit code through as our own
fn exit_code(status: ExitStatus) -> ExitCode {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from)
}

/// Log to stderr, honoring `RUST_LOG` unless overridden on the command line
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::builder()
            .with_default_directive(Level::WARN.into())
            .from_env_lossy()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(verbose),
        )
        .init();
}
