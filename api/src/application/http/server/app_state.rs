use std::sync::Arc;

use rentwise_core::application::RentwiseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RentwiseService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RentwiseService) -> Self {
        Self { args, service }
    }
}
