use crate::ports::{ArtifactStore, ServiceBackends, WriteOutcome};
use crate::services::{render_options, render_zone, render_zone_inclusions, UpdateLocks};
use chrono::NaiveDate;
use netpanel_domain::{
    ApplyError, BindSettings, DnsConfiguration, DomainError, ExecutionMode, ResolvedPaths,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

type Today = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Result of a successful apply.
#[derive(Debug, Clone)]
pub struct ApplyOutcome {
    pub applied: DnsConfiguration,
    pub paths: ResolvedPaths,
    /// Artifacts written, in write order.
    pub artifacts: Vec<PathBuf>,
    /// Records skipped while rendering.
    pub warnings: Vec<String>,
    pub reloaded: bool,
}

/// One artifact to be written.
struct Artifact {
    path: PathBuf,
    content: String,
    /// Zone name for zone files, checked with the zone checker.
    zone: Option<String>,
}

/// Compiles a `DnsConfiguration` into resolver artifacts, persists them,
/// checks them and reloads the service.
pub struct ApplyDnsConfigUseCase {
    store: Arc<dyn ArtifactStore>,
    production: ServiceBackends,
    simulation: ServiceBackends,
    settings: BindSettings,
    locks: Arc<UpdateLocks>,
    today: Today,
}

impl ApplyDnsConfigUseCase {
    pub fn new(
        store: Arc<dyn ArtifactStore>,
        production: ServiceBackends,
        simulation: ServiceBackends,
        settings: BindSettings,
    ) -> Self {
        Self {
            store,
            production,
            simulation,
            settings,
            locks: Arc::new(UpdateLocks::new()),
            today: Arc::new(|| chrono::Local::now().date_naive()),
        }
    }

    pub fn with_locks(mut self, locks: Arc<UpdateLocks>) -> Self {
        self.locks = locks;
        self
    }

    /// Override the calendar date used for synthesized serials.
    pub fn with_today(mut self, today: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.today = Arc::new(today);
        self
    }

    #[instrument(skip(self, config), fields(zones = config.zones.len()))]
    pub async fn execute(&self, config: DnsConfiguration) -> Result<ApplyOutcome, ApplyError> {
        if let Err(errors) = config.validate() {
            warn!(count = errors.len(), "Configuration rejected by validation");
            return Err(ApplyError::Validation(errors));
        }

        let paths = self.resolve_paths().await?;
        if let Err(errors) = check_artifact_collisions(&config, &paths) {
            warn!(count = errors.len(), "Zone file names collide with resolver artifacts");
            return Err(ApplyError::Validation(errors));
        }
        let _guard = self.locks.acquire(&paths.zones_dir).await;

        for dir in paths.required_dirs() {
            self.store
                .ensure_dir(&dir)
                .await
                .map_err(|e| match e {
                    DomainError::PermissionDenied { path, message } => ApplyError::Permission {
                        path,
                        reason: message,
                    },
                    other => ApplyError::Write {
                        path: dir.clone(),
                        reason: other.to_string(),
                        rolled_back: false,
                    },
                })?;
        }

        let (artifacts, warnings) = self.render_artifacts(&config, &paths);
        for warning in &warnings {
            warn!(warning = %warning, "Record skipped during rendering");
        }

        let written = self.write_artifacts(&artifacts).await?;

        let backends = self.backends(&paths);
        if let Err((artifact, err)) = self.check_artifacts(&backends, &artifacts).await {
            let rolled_back = if self.settings.rollback_policy.on_check_failure() {
                self.rollback(&written).await
            } else {
                false
            };
            error!(
                artifact = %artifact,
                error = %err,
                rolled_back,
                "Generated configuration failed the syntax check"
            );
            return Err(ApplyError::CheckFailed {
                artifact,
                output: err
                    .command_output()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string()),
                rolled_back,
            });
        }

        let mut reloaded = false;
        if config.dns_server_status {
            backends.controller.reload().await.map_err(|e| {
                error!(error = %e, "Configuration persisted but the service reload failed");
                ApplyError::ReloadFailed {
                    output: e
                        .command_output()
                        .map(str::to_string)
                        .unwrap_or_else(|| e.to_string()),
                }
            })?;
            reloaded = true;
        } else {
            info!("Resolver disabled in configuration, skipping reload");
        }

        info!(
            mode = %paths.mode,
            fell_back = paths.fell_back,
            artifacts = artifacts.len(),
            warnings = warnings.len(),
            reloaded,
            "DNS configuration applied"
        );

        Ok(ApplyOutcome {
            applied: config,
            artifacts: artifacts.into_iter().map(|a| a.path).collect(),
            paths,
            warnings,
            reloaded,
        })
    }

    /// Resolve targets for this call, falling back to the sandbox when the
    /// production layout is missing. The fallback never outlives the call.
    async fn resolve_paths(&self) -> Result<ResolvedPaths, ApplyError> {
        let paths = ResolvedPaths::resolve(self.settings.mode, &self.settings);
        if paths.mode != ExecutionMode::Production {
            return Ok(paths);
        }

        let zones_present = self.store.exists(&paths.zones_dir).await;
        let options_present = self.store.exists(paths.options_dir()).await;
        if !zones_present || !options_present {
            warn!(
                zones_dir = %paths.zones_dir.display(),
                options_dir = %paths.options_dir().display(),
                sandbox = %self.settings.sandbox_dir.display(),
                "Production resolver paths missing, using sandbox for this operation"
            );
            return Ok(ResolvedPaths::sandbox_fallback(&self.settings.sandbox_dir));
        }

        // A missing include directory is created later with the others;
        // only directories that already exist are checked for writability.
        let mut writable_dirs = vec![paths.zones_dir.clone(), paths.options_dir().to_path_buf()];
        let include_dir = paths.include_dir().to_path_buf();
        if !writable_dirs.contains(&include_dir) && self.store.exists(&include_dir).await {
            writable_dirs.push(include_dir);
        }
        for dir in writable_dirs {
            if let Err(e) = self.store.probe_writable(&dir).await {
                error!(path = %dir.display(), error = %e, "Resolver directory is not writable");
                return Err(ApplyError::Permission {
                    path: dir,
                    reason: e.to_string(),
                });
            }
        }

        Ok(paths)
    }

    fn backends(&self, paths: &ResolvedPaths) -> ServiceBackends {
        match paths.mode {
            ExecutionMode::Production => self.production.clone(),
            ExecutionMode::Simulation => self.simulation.clone(),
        }
    }

    /// Render every artifact up front: zone files in zone order, then the
    /// options file, then the zone inclusions.
    fn render_artifacts(
        &self,
        config: &DnsConfiguration,
        paths: &ResolvedPaths,
    ) -> (Vec<Artifact>, Vec<String>) {
        let today = (self.today)();
        let mut artifacts = Vec::with_capacity(config.zones.len() + 2);
        let mut warnings = Vec::new();

        for zone in config.zones.iter().filter(|z| z.zone_type.has_zone_file()) {
            let rendered = render_zone(zone, today);
            warnings.extend(
                rendered
                    .diagnostics
                    .iter()
                    .map(|d| format!("zone {}: {}", zone.origin(), d)),
            );
            artifacts.push(Artifact {
                path: paths.zone_file(&zone.file_name),
                content: rendered.text,
                zone: Some(zone.origin().to_string()),
            });
        }

        artifacts.push(Artifact {
            path: paths.options_file.clone(),
            content: render_options(config, paths),
            zone: None,
        });
        artifacts.push(Artifact {
            path: paths.zone_include_file.clone(),
            content: render_zone_inclusions(config, paths),
            zone: None,
        });

        (artifacts, warnings)
    }

    /// Write artifacts one at a time, undoing this call's writes on failure
    /// when the rollback policy asks for it.
    async fn write_artifacts(&self, artifacts: &[Artifact]) -> Result<Vec<WriteOutcome>, ApplyError> {
        let mut written = Vec::with_capacity(artifacts.len());

        for artifact in artifacts {
            match self
                .store
                .write_with_backup(&artifact.path, &artifact.content)
                .await
            {
                Ok(outcome) => written.push(outcome),
                Err(e) => {
                    let rolled_back = if self.settings.rollback_policy.on_write_failure() {
                        self.rollback(&written).await
                    } else {
                        written.is_empty()
                    };
                    error!(
                        path = %artifact.path.display(),
                        error = %e,
                        written = written.len(),
                        rolled_back,
                        "Failed to write configuration artifact"
                    );
                    return Err(ApplyError::Write {
                        path: artifact.path.clone(),
                        reason: e.to_string(),
                        rolled_back,
                    });
                }
            }
        }

        Ok(written)
    }

    async fn check_artifacts(
        &self,
        backends: &ServiceBackends,
        artifacts: &[Artifact],
    ) -> Result<(), (String, DomainError)> {
        for artifact in artifacts {
            let result = match &artifact.zone {
                Some(zone) => backends.checker.check_zone(zone, &artifact.path).await,
                None => backends.checker.check_config(&artifact.path).await,
            };
            result.map_err(|e| (artifact_label(&artifact.path, artifact.zone.as_deref()), e))?;
        }

        Ok(())
    }

    /// Restore every artifact written so far, newest first.
    /// Returns true only if all of them were restored.
    async fn rollback(&self, written: &[WriteOutcome]) -> bool {
        let mut restored_all = true;
        for outcome in written.iter().rev() {
            if let Err(e) = self.store.restore(outcome).await {
                error!(path = %outcome.path.display(), error = %e, "Failed to restore artifact");
                restored_all = false;
            }
        }
        if !written.is_empty() {
            warn!(count = written.len(), restored_all, "Rolled back configuration artifacts");
        }
        restored_all
    }
}

/// Zone files must not overwrite the options or inclusion file when they
/// share a directory.
fn check_artifact_collisions(
    config: &DnsConfiguration,
    paths: &ResolvedPaths,
) -> Result<(), Vec<String>> {
    let reserved = [&paths.options_file, &paths.zone_include_file];
    let errors: Vec<String> = config
        .zones
        .iter()
        .filter(|z| z.zone_type.has_zone_file())
        .filter(|z| reserved.contains(&&paths.zone_file(&z.file_name)))
        .map(|z| {
            format!(
                "zone '{}': file name '{}' collides with a resolver configuration file",
                z.origin(),
                z.file_name.trim()
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn artifact_label(path: &Path, zone: Option<&str>) -> String {
    match zone {
        Some(zone) => format!("zone {} ({})", zone, path.display()),
        None => path.display().to_string(),
    }
}
