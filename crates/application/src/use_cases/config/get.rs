use crate::ports::{ArtifactStore, ServiceBackends};
use netpanel_domain::{BindSettings, DnsConfiguration, ReadConfigError, ResolvedPaths};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Configuration offered to the dashboard when nothing is deployed yet.
#[derive(Debug, Clone)]
pub struct CurrentConfiguration {
    pub configuration: DnsConfiguration,
    /// Live state of the resolver process at read time.
    pub server_running: bool,
    pub is_default: bool,
}

/// Best-effort read-back of the current configuration.
///
/// Parsing deployed BIND syntax back into the model is unsupported: when
/// both system files exist the caller gets `ReadConfigError::NotImplemented`.
pub struct GetDnsConfigUseCase {
    store: Arc<dyn ArtifactStore>,
    production: ServiceBackends,
    simulation: ServiceBackends,
    settings: BindSettings,
}

impl GetDnsConfigUseCase {
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
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<CurrentConfiguration, ReadConfigError> {
        let paths = ResolvedPaths::resolve(self.settings.mode, &self.settings);
        let options_present = self.store.exists(&paths.options_file).await;
        let include_present = self.store.exists(&paths.zone_include_file).await;

        if options_present && include_present {
            info!(
                options_file = %paths.options_file.display(),
                "Existing resolver configuration found, read-back is not supported"
            );
            return Err(ReadConfigError::NotImplemented);
        }

        let backends = if paths.mode.is_simulation() {
            &self.simulation
        } else {
            &self.production
        };
        let server_running = match backends.controller.is_running().await {
            Ok(running) => running,
            Err(e) => {
                warn!(error = %e, "Could not determine resolver status, assuming stopped");
                false
            }
        };

        debug!(
            options_present,
            include_present, server_running, "Returning default configuration template"
        );

        Ok(CurrentConfiguration {
            configuration: DnsConfiguration::default_template(server_running),
            server_running,
            is_default: true,
        })
    }
}
