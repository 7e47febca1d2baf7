use std::io::{self, Write};
use std::process::Command;

use crate::builder::Plan;
use crate::error::AppError;
use crate::model::{CommandLine, ExecutionResult};

/// Write the plan's annotations followed by the `Running:` echo line.
pub fn emit<W: Write>(plan: &Plan, out: &mut W) -> io::Result<()> {
    for annotation in &plan.annotations {
        writeln!(out, "{}", annotation.render())?;
    }
    writeln!(out, "Running: {}", plan.command)?;
    out.flush()
}

/// Run the command as a single child with inherited stdio and wait for it.
///
/// Arguments are passed as a discrete vector; nothing goes through a shell.
pub fn execute(command: &CommandLine) -> Result<ExecutionResult, AppError> {
    tracing::debug!(program = command.program(), args = ?command.args(), "spawning scanner");

    let status = Command::new(command.program())
        .args(command.args())
        .status()
        .map_err(|err| AppError::launch(command.program(), err))?;

    let result = ExecutionResult::from(status);
    tracing::info!(code = result.code, "scanner exited");
    Ok(result)
}

/// Emit the plan, then execute it unless `dry_run` is set.
pub fn dispatch<W: Write>(
    plan: &Plan,
    out: &mut W,
    dry_run: bool,
) -> Result<ExecutionResult, AppError> {
    emit(plan, out)?;
    if dry_run {
        tracing::debug!("dry run, scanner not started");
        return Ok(ExecutionResult { code: 0 });
    }
    execute(&plan.command)
}
