use netpanel_domain::DomainError;
use tokio::process::Command;
use tracing::debug;

/// Run an external command to completion and return its combined output.
///
/// No timeout is applied: a hung command stalls the caller.
pub async fn run_command(program: &str, args: &[String]) -> Result<String, DomainError> {
    let invocation = command_line(program, args);
    debug!(command = %invocation, "Running external command");

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| DomainError::CommandSpawn {
            command: invocation.clone(),
            message: e.to_string(),
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        if !combined.is_empty() {
            combined.push('\n');
        }
        combined.push_str(stderr);
    }

    if !output.status.success() {
        return Err(DomainError::CommandFailed {
            command: invocation,
            status: output.status.code().unwrap_or(-1),
            output: combined,
        });
    }

    Ok(combined)
}

pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
