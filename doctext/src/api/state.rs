use std::sync::Arc;

use crate::config::Config;
use crate::processing::UploadPipeline;

/// Shared, read-only request state. Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: UploadPipeline,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let pipeline = UploadPipeline::new(&config.limits);
        Self::with_pipeline(config, pipeline)
    }

    pub fn with_pipeline(config: Config, pipeline: UploadPipeline) -> Self {
        Self {
            config: Arc::new(config),
            pipeline,
        }
    }
}
