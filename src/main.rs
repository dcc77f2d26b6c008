//! Purpose: `sandcheck` CLI entry point and command dispatch bootstrap.
//! Role: Binary crate root; parses args, runs commands, emits results on stdout.
//! Invariants: Bare invocation prints the sandbox banner demo on stdout.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::error::Error as StdError;
use std::io::{self, IsTerminal};

use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind as ClapErrorKind,
};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};

mod command_dispatch;

use sandcheck::api::{Error, ErrorKind, calculate_expr, greet, to_exit_code};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Run `sandcheck --help` for usage."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    command_dispatch::dispatch_command(cli.command).map_err(|err| (err, color_mode))
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .next()
        .unwrap_or("invalid arguments")
        .trim_start_matches("error: ")
        .to_string()
}

#[derive(Parser)]
#[command(
    name = "sandcheck",
    version,
    about = "PR checks sandbox: a greeter and a calculator",
    help_template = r#"{about-with-newline}
{before-help}USAGE
  {usage}

COMMANDS
{subcommands}

OPTIONS
{options}

{after-help}
"#,
    long_about = None,
    before_help = r#"A deliberately tiny application for exercising PR check pipelines.

Mental model:
  - `greet` formats a greeting from a name (pure)
  - `calc` does arithmetic on two operands (pure)
  - no arguments prints the banner plus sample invocations
"#,
    after_help = r#"EXAMPLES
  $ sandcheck
  $ sandcheck greet World
  $ sandcheck calc 2 3
  $ sandcheck calc 10 2 --op divide
  $ sandcheck calc 7 2 --op divide --json

LEARN MORE
  $ sandcheck <command> --help"#
)]
struct Cli {
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(
        arg_required_else_help = true,
        about = "Format a greeting from a name",
        long_about = r#"Format `Hello, <name>!` from a name.

The name is substituted verbatim: no trimming, no escaping, no case changes.
An empty name is rejected."#,
        after_help = r#"EXAMPLES
  $ sandcheck greet World
  $ sandcheck greet "Ada Lovelace"
  $ sandcheck greet World --json"#
    )]
    Greet {
        #[arg(help = "Name to greet (must be non-empty)")]
        name: String,
        #[arg(long, help = "Emit JSON instead of human-readable output")]
        json: bool,
    },
    #[command(
        arg_required_else_help = true,
        about = "Run one arithmetic operation on two operands",
        long_about = r#"Coerce two operands to numbers and apply one operation.

Operands take their leading numeric prefix ("3.5x" reads as 3.5); an operand
with no numeric prefix is rejected. Division by zero is rejected."#,
        after_help = r#"EXAMPLES
  $ sandcheck calc 2 3
  $ sandcheck calc 5 3 --op subtract
  $ sandcheck calc 10 2 --op divide
  $ sandcheck calc 3.5x 0.5 --json

NOTES
  - Operations: add (default), subtract, multiply, divide
  - Results follow IEEE-754 double-precision semantics"#
    )]
    Calc {
        #[arg(help = "First operand")]
        a: String,
        #[arg(help = "Second operand")]
        b: String,
        #[arg(
            long,
            default_value = "add",
            help = "Operation: add|subtract|multiply|divide"
        )]
        op: String,
        #[arg(long, help = "Emit JSON instead of human-readable output")]
        json: bool,
    },
    #[command(
        about = "Print version info",
        long_about = r#"Print version info: human-readable on a terminal, JSON otherwise."#,
        after_help = r#"EXAMPLES
  $ sandcheck version"#
    )]
    Version,
    #[command(
        arg_required_else_help = true,
        about = "Generate shell completions",
        long_about = r#"Generate shell completion scripts.

Prints a completion script for the given shell to stdout."#,
        after_help = r#"EXAMPLES
  $ sandcheck completion bash > ~/.local/share/bash-completion/completions/sandcheck
  $ sandcheck completion zsh > ~/.zfunc/_sandcheck
  $ sandcheck completion fish > ~/.config/fish/completions/sandcheck.fish"#
    )]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

fn emit_json(value: Value) {
    let json = if io::stdout().is_terminal() {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::InvalidInput => "invalid input".to_string(),
        ErrorKind::InvalidNumbers => "invalid numbers provided".to_string(),
        ErrorKind::DivisionByZero => "division by zero is not allowed".to_string(),
        ErrorKind::UnsupportedOperation => "unsupported operation".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(token) = err.token() {
        inner.insert("token".to_string(), json!(token));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(token) = err.token() {
        lines.push(format!(
            "{} {token}",
            colorize_label("token:", use_color, AnsiColor::Yellow)
        ));
    }
    for cause in error_causes(err) {
        lines.push(format!(
            "{} {cause}",
            colorize_label("cause:", use_color, AnsiColor::Yellow)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_respects_color_flag() {
        let err = Error::new(ErrorKind::Usage).with_message("bad input");
        let colored = error_text(&err, true);
        let plain = error_text(&err, false);
        assert!(colored.contains("\u{1b}[31merror:\u{1b}[0m"));
        assert!(plain.contains("error:"));
        assert!(!plain.contains("\u{1b}["));
    }

    #[test]
    fn error_json_carries_kind_hint_and_token() {
        let err = Error::new(ErrorKind::UnsupportedOperation)
            .with_message("unsupported operation")
            .with_token("power")
            .with_hint("Supported operations: add, subtract, multiply, divide.");
        let value = error_json(&err);
        let obj = value
            .get("error")
            .and_then(|v| v.as_object())
            .expect("error object");
        assert_eq!(
            obj.get("kind").and_then(|v| v.as_str()),
            Some("UnsupportedOperation")
        );
        assert_eq!(obj.get("token").and_then(|v| v.as_str()), Some("power"));
        assert!(obj.get("hint").and_then(|v| v.as_str()).is_some());
        assert!(obj.get("causes").is_none());
    }

    #[test]
    fn error_message_falls_back_per_kind() {
        let err = Error::new(ErrorKind::DivisionByZero);
        assert_eq!(error_message(&err), "division by zero is not allowed");
    }
}
