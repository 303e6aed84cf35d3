//! The failure boundary at the program entry point.
//!
//! A [`Reporter`] sees the final outcome of the program body exactly once.
//! Success passes through silently. Any error, or a panic when the body runs
//! under [`Reporter::run`], becomes one diagnostic line and a nonzero status.

use anyhow::Result;
use std::any::Any;
use std::io::{self, IsTerminal, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process::{self, ExitCode};
use thiserror::Error;

use crate::error::{CommandError, ErrorKind};
use crate::style::{self, Style};

/// Exit status for any reported failure.
pub const FAILURE: i32 = 1;

/// A panic captured by [`catch_panics`].
#[derive(Error, Debug)]
#[error("{0}")]
pub struct Panicked(String);

impl Panicked {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self(message)
    }
}

/// Converts the program outcome into diagnostics and an exit status.
#[derive(Debug)]
pub struct Reporter<W: Write = io::Stderr> {
    out: W,
    color: bool,
}

impl Reporter<io::Stderr> {
    /// Reports to standard error, colored when it is a terminal and
    /// `NO_COLOR` is unset.
    pub fn stderr() -> Self {
        let out = io::stderr();
        let color = style::color_allowed() && out.is_terminal();
        Self { out, color }
    }
}

impl Default for Reporter<io::Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W: Write> Reporter<W> {
    /// Reports to `out`, uncolored.
    pub const fn new(out: W) -> Self {
        Self { out, color: false }
    }

    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Returns the exit status for `result`, writing one line on failure.
    pub fn report(&mut self, result: Result<()>) -> i32 {
        let Err(err) = result else {
            return exitcode::OK;
        };

        let (label, description) = describe(&err);
        tracing::debug!(label, "reporting failure");

        let prefix = format!("[cmd] {label}:");
        let prefix = if self.color {
            Style::error(prefix)
        } else {
            prefix
        };
        let _ = writeln!(self.out, "{prefix} {description}");
        let _ = self.out.flush();
        FAILURE
    }

    /// Reports `result` and converts the status into a value for `main`.
    pub fn finish(mut self, result: Result<()>) -> ExitCode {
        match self.report(result) {
            exitcode::OK => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    }

    /// Reports `result` and terminates the process on failure. Returns
    /// normally on success.
    pub fn exit(mut self, result: Result<()>) {
        let code = self.report(result);
        if code != exitcode::OK {
            process::exit(code);
        }
    }

    /// Runs the program body, catching panics, and reports its outcome.
    pub fn run<F>(self, body: F) -> ExitCode
    where
        F: FnOnce() -> Result<()>,
    {
        self.finish(catch_panics(body))
    }
}

/// Runs `body`, turning a panic into a [`Panicked`] error.
///
/// The panic hook is silenced while `body` runs so the failure is only
/// reported once, by the [`Reporter`]. Call this at the entry point only;
/// the hook is process-wide.
pub fn catch_panics<F>(body: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(AssertUnwindSafe(body));
    panic::set_hook(hook);

    outcome.unwrap_or_else(|payload| Err(Panicked::from_payload(payload.as_ref()).into()))
}

fn describe(err: &anyhow::Error) -> (&'static str, String) {
    if let Some(err) = err.downcast_ref::<CommandError>() {
        let label = match err.kind() {
            ErrorKind::Configuration => "configuration error",
            ErrorKind::Usage => "usage error",
        };
        return (label, single_line(&err.to_string()));
    }
    if let Some(err) = err.downcast_ref::<clap::Error>() {
        let text = err.to_string();
        let text = text.strip_prefix("error: ").unwrap_or(&text);
        return ("flag error", single_line(text));
    }
    if err.is::<Panicked>() {
        return ("panic", single_line(&err.to_string()));
    }
    ("error", single_line(&format!("{err:#}")))
}

fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn output(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_report_success_is_silent() {
        let mut reporter = Reporter::new(Vec::new());
        assert_eq!(reporter.report(Ok(())), exitcode::OK);
        assert!(output(reporter).is_empty());
    }

    #[test]
    fn test_report_usage_error() {
        let mut reporter = Reporter::new(Vec::new());
        let err = CommandError::MissingCommand {
            known: vec!["one".into(), "two".into()],
        };

        assert_eq!(reporter.report(Err(err.into())), FAILURE);
        assert_eq!(
            output(reporter),
            "[cmd] usage error: missing command; known commands: [\"one\", \"two\"]\n"
        );
    }

    #[test]
    fn test_report_configuration_error() {
        let mut reporter = Reporter::new(Vec::new());
        let err = CommandError::RedundantCommand("one".into());

        assert_eq!(reporter.report(Err(err.into())), FAILURE);
        assert_eq!(
            output(reporter),
            "[cmd] configuration error: redundant command \"one\"\n"
        );
    }

    #[test]
    fn test_report_includes_context_chain_on_one_line() {
        let mut reporter = Reporter::new(Vec::new());
        let err = Err::<(), _>(anyhow::anyhow!("disk full\nretry later"))
            .context("writing output")
            .unwrap_err();

        assert_eq!(reporter.report(Err(err)), FAILURE);
        let text = output(reporter);
        assert_eq!(text.lines().count(), 1);
        assert_eq!(
            text,
            "[cmd] error: writing output: disk full retry later\n"
        );
    }

    #[test]
    fn test_report_color_wraps_prefix_only() {
        let mut reporter = Reporter::new(Vec::new()).with_color(true);
        reporter.report(Err(anyhow::anyhow!("boom")));

        let text = output(reporter);
        assert!(text.contains("\u{1b}["));
        assert!(text.ends_with(" boom\n"));
    }

    #[test]
    fn test_panic_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(
            Panicked::from_payload(payload.as_ref()).to_string(),
            "static message"
        );

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(
            Panicked::from_payload(payload.as_ref()).to_string(),
            "owned message"
        );

        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(
            Panicked::from_payload(payload.as_ref()).to_string(),
            "non-string panic payload"
        );
    }

    #[test]
    fn test_catch_panics_passes_results_through() {
        assert!(catch_panics(|| Ok(())).is_ok());

        let err = catch_panics(|| anyhow::bail!("plain failure")).unwrap_err();
        assert!(!err.is::<Panicked>());
        assert_eq!(err.to_string(), "plain failure");
    }

    #[test]
    fn test_catch_panics_converts_panic() {
        let err = catch_panics(|| panic!("handler exploded")).unwrap_err();
        assert!(err.is::<Panicked>());
        assert_eq!(err.to_string(), "handler exploded");
    }

    #[test]
    fn test_exit_returns_on_success() {
        let mut out = Vec::new();
        Reporter::new(&mut out).exit(Ok(()));
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\n\n  b  \nc"), "a b c");
        assert_eq!(single_line(""), "");
    }
}
