//! The host bridge contract.
//!
//! Both frontends talk to the host through this trait: the panel over the
//! injected `VR` JavaScript namespace, the host binary in-process. Operations
//! carry `Result` so callers can observe rejections; whether to await or
//! detach is the caller's choice.

use thiserror::Error;

use crate::offset::PoleOffset;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("offset apply rejected by host: {0}")]
    Apply(String),
    #[error("config save rejected by host: {0}")]
    Save(String),
}

pub trait PoleBridge {
    /// Apply the full offset record to the pole anchor.
    fn apply_offset(&self, offset: &PoleOffset) -> Result<(), BridgeError>;

    /// Persist the host configuration.
    fn save_config(&self) -> Result<(), BridgeError>;
}
