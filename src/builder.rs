use crate::annotation::Annotation;
use crate::error::AppError;
use crate::model::{CommandLine, InvocationInputs, SCAN_SUBCOMMAND};

/// Assemble `<program> scan <path>` followed by the optional flag groups.
///
/// Flags are appended in a fixed order (repo, image, force, format) no matter
/// which inputs are present.
pub fn build_command(program: &str, inputs: &InvocationInputs) -> CommandLine {
    let mut command = CommandLine::new(program);
    command.arg(SCAN_SUBCOMMAND).arg(inputs.path.as_str());

    if let Some(repo) = &inputs.repo {
        command.arg("--repo").arg(repo.as_str());
    }
    if let Some(image) = &inputs.image {
        command.arg("--image").arg(image.as_str());
    }
    if inputs.force_enabled() {
        command.arg("--force");
    }
    if let Some(flag) = inputs.output_format().flag() {
        command.arg(flag);
    }

    command
}

/// Annotations for the security-relevant inputs, in flag order.
pub fn annotations_for(inputs: &InvocationInputs) -> Vec<Annotation> {
    let mut annotations = Vec::new();

    if let Some(repo) = &inputs.repo {
        annotations.push(Annotation::notice(format!("Verifying model integrity against {repo}")));
    }
    if let Some(image) = &inputs.image {
        annotations.push(Annotation::notice(format!("Signing container image {image}")));
    }
    if inputs.force_enabled() {
        annotations.push(Annotation::warning(
            "Break-glass mode enabled: the scan will not fail on detected threats",
        ));
    }

    annotations
}

/// A fully prepared run: the command line plus the annotations to emit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub command: CommandLine,
    pub annotations: Vec<Annotation>,
}

impl Plan {
    pub fn new(program: &str, inputs: &InvocationInputs) -> Result<Self, AppError> {
        inputs.validate()?;
        Ok(Self { command: build_command(program, inputs), annotations: annotations_for(inputs) })
    }
}
