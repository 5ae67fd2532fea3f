use super::policy::{CollapsePolicy, FanInPolicy};

/// Immutable settings for one catalog, fixed at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    pub source_urls: Vec<String>,
    pub fan_in: FanInPolicy,
    pub collapse: CollapsePolicy,
}

impl PipelineConfig {
    pub fn new(source_urls: Vec<String>) -> Self {
        Self {
            source_urls,
            ..Default::default()
        }
    }

    pub fn with_fan_in(mut self, fan_in: FanInPolicy) -> Self {
        self.fan_in = fan_in;
        self
    }

    pub fn with_collapse(mut self, collapse: CollapsePolicy) -> Self {
        self.collapse = collapse;
        self
    }
}
