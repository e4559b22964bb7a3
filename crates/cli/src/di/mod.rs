pub mod backends;
pub mod use_cases;

pub use backends::Backends;
pub use use_cases::UseCases;

use netpanel_api::AppState;
use netpanel_domain::Config;

/// Everything the web server needs, wired from configuration.
pub struct Services {
    pub use_cases: UseCases,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let backends = Backends::new(&config.bind);
        Self {
            use_cases: UseCases::new(&config.bind, backends),
        }
    }

    pub fn into_state(self) -> AppState {
        AppState {
            apply_config: self.use_cases.apply_config,
            get_config: self.use_cases.get_config,
            get_status: self.use_cases.get_status,
        }
    }
}
