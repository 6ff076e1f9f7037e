//! Shared, read-only state handed to every tool handler.

use std::sync::Arc;

use crate::core::config::Config;
use crate::domains::units::UnitConverter;

/// Process-wide dependencies built once at startup.
///
/// Cloning is cheap; handlers receive a clone instead of reaching for
/// globals.
#[derive(Clone)]
pub struct ToolContext {
    pub config: Arc<Config>,
    pub units: Arc<UnitConverter>,
}

impl ToolContext {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            units: Arc::new(UnitConverter::new()),
        }
    }
}
