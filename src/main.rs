//! gitrev - commit history extraction for git
//!
//! Binary entry point for the command-line tool.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitrev::git::{GitError, GitExecutor, History, HistoryOptions};
use gitrev::logging::LogContext;
use gitrev::model::Revision;
use gitrev::retry::{RetryPolicy, with_retry};

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "gitrev=info";

#[derive(Parser)]
#[command(name = "gitrev")]
#[command(about = "List, inspect and attribute commits from git history")]
#[command(version)]
struct Args {
    /// Working copy to query (defaults to the current directory)
    #[arg(short = 'C', long = "repo", global = true)]
    repo: Option<PathBuf>,

    /// Maximum concurrent per-commit queries
    #[arg(short, long, env = "GITREV_JOBS", default_value_t = 1, global = true)]
    jobs: usize,

    /// Command run as `<command> <identifier> <detail>` on failures
    #[arg(long, env = "GITREV_ERROR_COMMAND", global = true)]
    error_command: Option<PathBuf>,

    /// File receiving timestamped start/finish/failure events
    #[arg(long, env = "GITREV_IO_LOG", global = true)]
    io_log: Option<PathBuf>,

    /// Extra attempts after a failed git invocation
    #[arg(long, default_value_t = 0, global = true)]
    retries: u32,

    /// Wait between attempts, in milliseconds
    #[arg(long, default_value_t = 1000, global = true)]
    retry_delay_ms: u64,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Hashes after START up to HEAD, or in START..END, oldest first
    Range { start: String, end: Option<String> },

    /// The last N hashes reachable from a reference, oldest first
    Last {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        #[arg(default_value = "HEAD")]
        reference: String,
    },

    /// Author, committer and message of each commit
    Show {
        #[arg(required = true)]
        hashes: Vec<String>,
    },

    /// Unique authors after START up to HEAD (or in START..END)
    Authors { start: String, end: Option<String> },

    /// Raw message of the newest commit after START
    Body { start: String },

    /// Raw messages of every commit after START, oldest first
    Bodies { start: String },
}

impl Cmd {
    /// Identifier used when reporting this command's events
    fn identifier(&self) -> &'static str {
        match self {
            Cmd::Range { .. } => "gitrev-range",
            Cmd::Last { .. } => "gitrev-last",
            Cmd::Show { .. } => "gitrev-show",
            Cmd::Authors { .. } => "gitrev-authors",
            Cmd::Body { .. } => "gitrev-body",
            Cmd::Bodies { .. } => "gitrev-bodies",
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = log_context(&args)?;

    let executor = match args.repo {
        Some(ref path) => GitExecutor::with_repo_path(path.clone()),
        None => GitExecutor::new(),
    };
    executor.check_version()?;

    let history = History::with_options(
        executor,
        HistoryOptions {
            jobs: args.jobs.max(1),
        },
    );
    let policy = RetryPolicy {
        retries: args.retries,
        delay: Duration::from_millis(args.retry_delay_ms),
    };

    let identifier = args.command.identifier();
    ctx.on_io_event(identifier, "start");

    match with_retry(&ctx, identifier, policy, || run(&history, &args.command)) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ctx.on_io_event(identifier, "done");
            Ok(())
        }
        Err(e) => {
            ctx.on_io_event(identifier, &format!("failed: {e}"));
            Err(e).wrap_err_with(|| format!("{identifier} failed"))
        }
    }
}

fn log_context(args: &Args) -> color_eyre::Result<LogContext> {
    let mut ctx = LogContext::new();
    if let Some(ref command) = args.error_command {
        ctx.set_system_error_command(command);
    }
    if let Some(ref path) = args.io_log {
        ctx.set_io_log_path(path)
            .wrap_err_with(|| format!("invalid io log path {}", path.display()))?;
    }
    Ok(ctx)
}

/// Run one command and render its output lines
fn run(history: &History<GitExecutor>, command: &Cmd) -> Result<Vec<String>, GitError> {
    match command {
        Cmd::Range { start, end } => match end {
            Some(end) => history.range_between(start, end),
            None => history.range_to_here(start),
        },
        Cmd::Last { count, reference } => history.last_n_from_ref(*count, reference),
        Cmd::Show { hashes } => Ok(history
            .revisions_from_hashes(hashes)?
            .iter()
            .map(render_revision)
            .collect()),
        Cmd::Authors { start, end } => {
            let hashes = match end {
                Some(end) => history.range_between(start, end)?,
                None => history.range_to_here(start)?,
            };
            Ok(history
                .author_names_emails_from_hashes(&hashes)?
                .iter()
                .map(ToString::to_string)
                .collect())
        }
        Cmd::Body { start } => Ok(vec![history.range_to_here_raw_body(start)?]),
        Cmd::Bodies { start } => history.range_to_here_bodies(start),
    }
}

fn render_revision(revision: &Revision) -> String {
    let mut out = format!(
        "commit {}\nAuthor: {} <{}>\nCommit: {} <{}>\n\n    {}\n",
        revision.hash,
        revision.author_name,
        revision.author_email,
        revision.committer_name,
        revision.committer_email,
        revision.subject,
    );
    if !revision.message.is_empty() {
        out.push('\n');
        for line in revision.message.lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_log_filter_is_info() {
        let filter = tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_render_revision_indents_message() {
        let revision = Revision {
            hash: "0123456789abcdef0123456789abcdef01234567".to_string(),
            author_email: "noone@nowhere.com".to_string(),
            author_name: "No one".to_string(),
            committer_email: "committer@example.com".to_string(),
            committer_name: "Test Committer".to_string(),
            subject: "ONLY_FORK".to_string(),
            message: "BODY\nBODY\n".to_string(),
        };

        assert_eq!(
            render_revision(&revision),
            "commit 0123456789abcdef0123456789abcdef01234567\n\
             Author: No one <noone@nowhere.com>\n\
             Commit: Test Committer <committer@example.com>\n\
             \n    ONLY_FORK\n\
             \n    BODY\n    BODY\n"
        );
    }
}
