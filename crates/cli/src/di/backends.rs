use netpanel_application::ports::{ArtifactStore, ServiceBackends};
use netpanel_domain::BindSettings;
use netpanel_infrastructure::{
    FsArtifactStore, NamedChecker, SimulatedChecker, SimulatedServiceController,
    SystemServiceController,
};
use std::sync::Arc;

pub struct Backends {
    pub store: Arc<dyn ArtifactStore>,
    pub production: ServiceBackends,
    pub simulation: ServiceBackends,
}

impl Backends {
    pub fn new(settings: &BindSettings) -> Self {
        let production = ServiceBackends::new(
            Arc::new(NamedChecker::new(
                settings.checkconf_command.clone(),
                settings.checkzone_command.clone(),
            )),
            Arc::new(SystemServiceController::new(
                settings.reload_command.clone(),
                settings.status_command.clone(),
            )),
        );

        let simulation = ServiceBackends::new(
            Arc::new(SimulatedChecker::new(
                settings.checkconf_command.clone(),
                settings.checkzone_command.clone(),
            )),
            Arc::new(SimulatedServiceController::new(
                settings.reload_command.clone(),
            )),
        );

        Self {
            store: Arc::new(FsArtifactStore::new()),
            production,
            simulation,
        }
    }
}
