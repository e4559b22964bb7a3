use super::command::{command_line, run_command};
use async_trait::async_trait;
use netpanel_application::ports::ServiceController;
use netpanel_domain::DomainError;
use tracing::{info, warn};

/// Controls the resolver through configured shell commands
/// (`rndc reload`, `systemctl is-active named` by default).
pub struct SystemServiceController {
    reload_command: Vec<String>,
    status_command: Vec<String>,
}

impl SystemServiceController {
    pub fn new(reload_command: Vec<String>, status_command: Vec<String>) -> Self {
        Self {
            reload_command,
            status_command,
        }
    }

    fn split(argv: &[String]) -> Result<(&str, &[String]), DomainError> {
        argv.split_first()
            .map(|(program, args)| (program.as_str(), args))
            .ok_or_else(|| DomainError::InvalidConfiguration("empty command".to_string()))
    }
}

#[async_trait]
impl ServiceController for SystemServiceController {
    async fn reload(&self) -> Result<(), DomainError> {
        let (program, args) = Self::split(&self.reload_command)?;
        let output = run_command(program, args).await?;
        info!(output = %output, "Resolver reloaded");
        Ok(())
    }

    async fn is_running(&self) -> Result<bool, DomainError> {
        let (program, args) = Self::split(&self.status_command)?;
        match run_command(program, args).await {
            Ok(_) => Ok(true),
            // Status probes such as `systemctl is-active` report "inactive"
            // through a non-zero exit code.
            Err(DomainError::CommandFailed { output, status, .. }) => {
                warn!(status, output = %output, "Resolver is not active");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

/// Logs the commands a real controller would run; never spawns a process.
pub struct SimulatedServiceController {
    reload_command: Vec<String>,
}

impl SimulatedServiceController {
    pub fn new(reload_command: Vec<String>) -> Self {
        Self { reload_command }
    }
}

#[async_trait]
impl ServiceController for SimulatedServiceController {
    async fn reload(&self) -> Result<(), DomainError> {
        let invocation = match self.reload_command.split_first() {
            Some((program, args)) => command_line(program, args),
            None => String::new(),
        };
        info!(command = %invocation, "[simulation] would reload the resolver");
        Ok(())
    }

    async fn is_running(&self) -> Result<bool, DomainError> {
        info!("[simulation] resolver status probe skipped, reporting stopped");
        Ok(false)
    }
}
