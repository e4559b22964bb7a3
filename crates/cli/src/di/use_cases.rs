use super::Backends;
use netpanel_application::services::UpdateLocks;
use netpanel_application::use_cases::{
    ApplyDnsConfigUseCase, GetDnsConfigUseCase, GetServiceStatusUseCase,
};
use netpanel_domain::BindSettings;
use std::sync::Arc;

pub struct UseCases {
    pub apply_config: Arc<ApplyDnsConfigUseCase>,
    pub get_config: Arc<GetDnsConfigUseCase>,
    pub get_status: Arc<GetServiceStatusUseCase>,
}

impl UseCases {
    pub fn new(settings: &BindSettings, backends: Backends) -> Self {
        let locks = Arc::new(UpdateLocks::new());
        let status_backends = if settings.mode.is_simulation() {
            backends.simulation.clone()
        } else {
            backends.production.clone()
        };

        Self {
            apply_config: Arc::new(
                ApplyDnsConfigUseCase::new(
                    backends.store.clone(),
                    backends.production.clone(),
                    backends.simulation.clone(),
                    settings.clone(),
                )
                .with_locks(locks),
            ),
            get_config: Arc::new(GetDnsConfigUseCase::new(
                backends.store,
                backends.production,
                backends.simulation,
                settings.clone(),
            )),
            get_status: Arc::new(GetServiceStatusUseCase::new(status_backends, settings.mode)),
        }
    }
}
