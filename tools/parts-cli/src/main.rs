mod command;
mod driver;
mod render;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use parts_session::{FeedbackPolicy, SentenceSession, SessionConfig};
use tracing_subscriber::EnvFilter;

use crate::driver::{Driver, OutputFormat};

#[derive(Parser)]
#[command(author, version, about = "Build a sentence from the word bank and check its grammar")]
struct Cli {
    /// Read commands from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Print the view model as one JSON line per redraw
    #[arg(long)]
    json: bool,

    /// Hide the previous feedback as soon as the sentence is edited
    #[arg(long)]
    clear_feedback_on_edit: bool,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let policy = if self.clear_feedback_on_edit {
            FeedbackPolicy::ClearOnEdit
        } else {
            FeedbackPolicy::KeepUntilCheck
        };
        SessionConfig::default().with_feedback_policy(policy)
    }

    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Drive one session to completion, reading the script if one was given.
fn run<W: Write>(cli: &Cli, out: W) -> anyhow::Result<SentenceSession> {
    let session = SentenceSession::with_config(cli.session_config());
    let mut driver = Driver::new(session, out, cli.format());

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            driver.run(BufReader::new(file), false)?;
        }
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal() && !cli.json;
            driver.run(stdin.lock(), prompt)?;
        }
    }

    Ok(driver.into_inner().0)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli, io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parts_session::Verdict;
    use tempfile::NamedTempFile;

    fn script(lines: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(lines.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_flag_mapping() {
        let cli = Cli::parse_from(["parts-cli"]);
        assert_eq!(cli.session_config().feedback_policy, FeedbackPolicy::KeepUntilCheck);
        assert_eq!(cli.format(), OutputFormat::Text);

        let cli = Cli::parse_from(["parts-cli", "--clear-feedback-on-edit", "--json", "-vv"]);
        assert_eq!(cli.session_config().feedback_policy, FeedbackPolicy::ClearOnEdit);
        assert_eq!(cli.format(), OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_runs_script_file() {
        let file = script("add She\nadd is\nadd hungry\ncheck\n");
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["parts-cli", "--script", path]);

        let mut out = Vec::new();
        let session = run(&cli, &mut out).unwrap();
        assert_eq!(session.display_line(), "She is hungry");
        assert_eq!(session.feedback(), Some(Verdict::Correct));
        assert!(String::from_utf8(out).unwrap().contains("Correct sentence!"));
    }

    #[test]
    fn test_script_with_clear_on_edit() {
        let file = script("add I\nadd am\ncheck\nadd happy\n");
        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["parts-cli", "-s", path, "--clear-feedback-on-edit"]);

        let session = run(&cli, Vec::new()).unwrap();
        assert_eq!(session.texts(), ["I", "am", "happy"]);
        assert_eq!(session.feedback(), None);
    }

    #[test]
    fn test_missing_script_is_reported() {
        let cli = Cli::parse_from(["parts-cli", "--script", "/nonexistent/parts-cli/script.txt"]);
        let err = run(&cli, Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("failed to open script"));
    }
}
