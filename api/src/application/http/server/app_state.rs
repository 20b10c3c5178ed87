use std::sync::Arc;

use nutricoach_core::application::NutriCoachService;

use crate::{application::http::coach::ui_config::UiConfig, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriCoachService,
    pub ui: Arc<UiConfig>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriCoachService, ui: UiConfig) -> Self {
        Self {
            args,
            service,
            ui: Arc::new(ui),
        }
    }
}
