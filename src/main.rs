use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use veritensor_action::commands::execute_scan;
use veritensor_action::commands::scan::ScanOptions;
use veritensor_action::error::AppError;
use veritensor_action::model::{ExecutionResult, InvocationInputs};

fn main() {
    init_tracing();

    match run() {
        Ok(result) => std::process::exit(result.code),
        Err(err) => {
            tracing::debug!(error = ?err, "action failed before the scanner finished");
            eprintln!("Error: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}

/// Variables the CI host exports for action inputs, in positional order.
const INPUT_VARS: [&str; 5] =
    ["INPUT_PATH", "INPUT_REPO", "INPUT_IMAGE", "INPUT_FORCE", "INPUT_FORMAT"];

fn run() -> Result<ExecutionResult, AppError> {
    let cli = Cli::parse();

    let options = ScanOptions {
        inputs: InvocationInputs::new(
            input_at(&cli.inputs, 0),
            input_at(&cli.inputs, 1),
            input_at(&cli.inputs, 2),
            input_at(&cli.inputs, 3),
            input_at(&cli.inputs, 4),
        ),
        tool: cli.tool,
        dry_run: cli.dry_run,
    };
    execute_scan(options)
}

/// Positional value at `index`, falling back to its `INPUT_*` variable.
fn input_at(inputs: &[String], index: usize) -> String {
    inputs
        .get(index)
        .cloned()
        .or_else(|| std::env::var(INPUT_VARS[index]).ok())
        .unwrap_or_default()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("VERITENSOR_ACTION_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "veritensor-action",
    version,
    about = "Run the veritensor model scanner from a CI action."
)]
struct Cli {
    /// Scanner program to invoke.
    #[arg(long = "tool", value_name = "PROGRAM", env = "VERITENSOR_ACTION_TOOL")]
    tool: Option<String>,

    /// Print the annotations and command line without running the scanner.
    #[arg(long = "dry-run", action = ArgAction::SetTrue)]
    dry_run: bool,

    /// Action inputs in order: PATH [REPO] [IMAGE] [FORCE] [FORMAT].
    ///
    /// Everything after the first input is taken verbatim, including values
    /// that start with `-`.
    #[arg(
        value_name = "INPUTS",
        num_args = 0..=5,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    inputs: Vec<String>,
}
