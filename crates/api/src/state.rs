use netpanel_application::use_cases::{
    ApplyDnsConfigUseCase, GetDnsConfigUseCase, GetServiceStatusUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub apply_config: Arc<ApplyDnsConfigUseCase>,
    pub get_config: Arc<GetDnsConfigUseCase>,
    pub get_status: Arc<GetServiceStatusUseCase>,
}
