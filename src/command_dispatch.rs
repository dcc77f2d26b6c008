//! Purpose: Hold top-level CLI command dispatch for `sandcheck`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Command behavior, output envelopes, and exit code semantics stay unchanged.
//! Invariants: The bare-invocation banner lines are a stable contract for check pipelines.

use super::*;

pub(super) fn dispatch_command(command: Option<Command>) -> Result<RunOutcome, Error> {
    match command {
        None => run_demo(),
        Some(Command::Greet { name, json }) => {
            let greeting = greet(&Value::String(name))?;
            if json {
                emit_json(json!({ "greeting": greeting }));
            } else {
                println!("{greeting}");
            }
            Ok(RunOutcome::ok())
        }
        Some(Command::Calc { a, b, op, json }) => {
            let result = calculate_expr(
                &Value::String(a.clone()),
                &Value::String(b.clone()),
                Some(&op),
            )?;
            if json {
                emit_json(json!({ "a": a, "b": b, "op": op, "result": result }));
            } else {
                println!("{result}");
            }
            Ok(RunOutcome::ok())
        }
        Some(Command::Version) => {
            if io::stdout().is_terminal() {
                println!("sandcheck {}", env!("CARGO_PKG_VERSION"));
            } else {
                emit_json(json!({
                    "name": "sandcheck",
                    "version": env!("CARGO_PKG_VERSION"),
                }));
            }
            Ok(RunOutcome::ok())
        }
        Some(Command::Completion { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "sandcheck", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
    }
}

fn run_demo() -> Result<RunOutcome, Error> {
    println!("PR Checks Sandbox - Test Application");
    println!("{}", greet(&json!("World"))?);
    println!("2 + 3 = {}", calculate_expr(&json!(2), &json!(3), None)?);
    Ok(RunOutcome::ok())
}
