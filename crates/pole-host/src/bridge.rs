//! Host-side implementation of the panel bridge.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use pole_core::{BridgeError, PoleBridge, PoleConfig, PoleOffset};

/// What the panel's `VR.set_pole_offset` / `VR.save_config` land on: the
/// shared offset the tracking loop reads, the in-memory config, and the
/// config path for saves.
pub struct HostBridge {
    offset: Arc<Mutex<PoleOffset>>,
    config: Arc<Mutex<PoleConfig>>,
    config_path: PathBuf,
}

impl HostBridge {
    pub fn new(
        offset: Arc<Mutex<PoleOffset>>,
        config: Arc<Mutex<PoleConfig>>,
        config_path: PathBuf,
    ) -> Self {
        Self {
            offset,
            config,
            config_path,
        }
    }
}

impl PoleBridge for HostBridge {
    fn apply_offset(&self, offset: &PoleOffset) -> Result<(), BridgeError> {
        *self.offset.lock().unwrap() = *offset;
        self.config.lock().unwrap().set_offset(offset);
        log::debug!(
            "[bridge] offset applied: ({:.6}, {:.6}, {:.6})",
            offset.x,
            offset.y,
            offset.z
        );
        Ok(())
    }

    fn save_config(&self) -> Result<(), BridgeError> {
        log::info!("[bridge] saving config");
        let config = self.config.lock().unwrap();
        config
            .save(&self.config_path)
            .map_err(|e| BridgeError::Save(e.to_string()))
    }
}
