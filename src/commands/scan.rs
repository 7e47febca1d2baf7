use std::io;

use crate::builder::Plan;
use crate::config::Config;
use crate::dispatch::dispatch;
use crate::error::AppError;
use crate::model::{ExecutionResult, InvocationInputs};

pub struct ScanOptions {
    pub inputs: InvocationInputs,
    /// Scanner program from `--tool` or its environment variable.
    pub tool: Option<String>,
    pub dry_run: bool,
}

/// Build the scanner invocation, announce it, and run it to completion.
pub fn execute_scan(options: ScanOptions) -> Result<ExecutionResult, AppError> {
    let config = Config::load()?;
    let program = config.resolve_tool(options.tool.as_deref())?;
    let plan = Plan::new(&program, &options.inputs)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&plan, &mut out, options.dry_run)
}
