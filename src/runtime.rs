use std::sync::Once;

use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use ort::Result as OrtResult;

static INIT: Once = Once::new();

/// Execution settings for the ONNX Runtime session backing a classifier.
#[derive(Debug)]
pub struct RuntimeConfig {
    /// Threads within a single operator. The default of 1 keeps inference
    /// strictly single-threaded; 0 lets ONNX Runtime decide.
    pub intra_threads: usize,
    /// Threads across independent operators. 0 lets ONNX Runtime decide.
    pub inter_threads: usize,
    pub optimization_level: GraphOptimizationLevel,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            intra_threads: 1,
            inter_threads: 0,
            optimization_level: GraphOptimizationLevel::Level3,
        }
    }
}

impl Clone for RuntimeConfig {
    fn clone(&self) -> Self {
        Self {
            intra_threads: self.intra_threads,
            inter_threads: self.inter_threads,
            optimization_level: clone_level(&self.optimization_level),
        }
    }
}

// GraphOptimizationLevel does not implement Clone.
fn clone_level(level: &GraphOptimizationLevel) -> GraphOptimizationLevel {
    match level {
        GraphOptimizationLevel::Disable => GraphOptimizationLevel::Disable,
        GraphOptimizationLevel::Level1 => GraphOptimizationLevel::Level1,
        GraphOptimizationLevel::Level2 => GraphOptimizationLevel::Level2,
        GraphOptimizationLevel::Level3 => GraphOptimizationLevel::Level3,
    }
}

pub fn ensure_initialized() -> OrtResult<()> {
    INIT.call_once(|| {
        ort::init()
            .with_name("amygdala")
            .commit()
            .expect("Failed to initialize ONNX Runtime environment");
    });
    Ok(())
}

/// Session builder configured from `config`, against the shared ONNX Runtime
/// environment.
pub fn create_session_builder(config: &RuntimeConfig) -> OrtResult<SessionBuilder> {
    ensure_initialized()?;
    let mut builder = Session::builder()?;

    if config.intra_threads > 0 {
        builder = builder.with_intra_threads(config.intra_threads)?;
    }
    if config.inter_threads > 0 {
        builder = builder.with_inter_threads(config.inter_threads)?;
    }
    builder = builder.with_optimization_level(clone_level(&config.optimization_level))?;

    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_initializes_once() {
        assert!(ensure_initialized().is_ok());
        assert!(ensure_initialized().is_ok()); // Second call should be fine
    }

    #[test]
    fn session_builder_accepts_config() {
        let config = RuntimeConfig {
            intra_threads: 2,
            inter_threads: 2,
            optimization_level: GraphOptimizationLevel::Level1,
        };
        assert!(create_session_builder(&config).is_ok());
    }

    #[test]
    fn default_config_is_single_threaded() {
        let config = RuntimeConfig::default();
        assert_eq!(config.intra_threads, 1);
    }
}
