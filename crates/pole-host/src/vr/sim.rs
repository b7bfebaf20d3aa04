//! In-memory runtime backend.
//!
//! Records every overlay call and scripts a single base station, which is
//! enough to drive the whole tracking path in the dry-run binary and in
//! tests without a headset attached.

use std::path::{Path, PathBuf};

use glam::Mat4;

use super::{DeviceClass, OverlayHandle, OverlayRuntime, TrackingRuntime, VrError};

/// Device index the simulated station reports at. Index 0 is the HMD.
pub const SIM_STATION_INDEX: u32 = 1;

#[derive(Clone, Debug)]
pub struct SimStation {
    pub serial: String,
    pub pose: Mat4,
    pub connected: bool,
    pub pose_valid: bool,
}

/// Everything the sim has been told about one overlay.
#[derive(Clone, Debug, Default)]
pub struct OverlayState {
    pub key: String,
    pub name: String,
    pub image: Option<PathBuf>,
    pub color: Option<[f32; 3]>,
    pub alpha: Option<f32>,
    pub width_m: Option<f32>,
    pub curvature: Option<f32>,
    pub visible: bool,
    pub absolute_pose: Option<Mat4>,
    pub hmd_relative_pose: Option<Mat4>,
}

#[derive(Debug, Default)]
pub struct SimRuntime {
    overlays: Vec<OverlayState>,
    station: Option<SimStation>,
}

impl SimRuntime {
    /// Empty runtime: no devices beyond the HMD, no overlays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime with one connected base station at `pose`.
    pub fn with_station(serial: impl Into<String>, pose: Mat4) -> Self {
        Self {
            overlays: Vec::new(),
            station: Some(SimStation {
                serial: serial.into(),
                pose,
                connected: true,
                pose_valid: true,
            }),
        }
    }

    pub fn overlay(&self, handle: OverlayHandle) -> Option<&OverlayState> {
        self.overlays.get(handle.0 as usize)
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// Flip pose validity on the scripted station.
    pub fn set_pose_valid(&mut self, valid: bool) {
        if let Some(station) = &mut self.station {
            station.pose_valid = valid;
        }
    }

    fn state_mut(&mut self, handle: OverlayHandle) -> Result<&mut OverlayState, VrError> {
        self.overlays
            .get_mut(handle.0 as usize)
            .ok_or(VrError::UnknownHandle(handle))
    }
}

impl OverlayRuntime for SimRuntime {
    fn create_overlay(&mut self, key: &str, name: &str) -> Result<OverlayHandle, VrError> {
        let handle = OverlayHandle(self.overlays.len() as u64);
        self.overlays.push(OverlayState {
            key: key.to_string(),
            name: name.to_string(),
            ..Default::default()
        });
        log::debug!("[sim] overlay `{key}` created as {handle:?}");
        Ok(handle)
    }

    fn set_image(&mut self, handle: OverlayHandle, path: &Path) -> Result<(), VrError> {
        self.state_mut(handle)?.image = Some(path.to_path_buf());
        Ok(())
    }

    fn set_color(&mut self, handle: OverlayHandle, rgb: [f32; 3]) -> Result<(), VrError> {
        self.state_mut(handle)?.color = Some(rgb);
        Ok(())
    }

    fn set_alpha(&mut self, handle: OverlayHandle, alpha: f32) -> Result<(), VrError> {
        self.state_mut(handle)?.alpha = Some(alpha);
        Ok(())
    }

    fn set_width_m(&mut self, handle: OverlayHandle, width: f32) -> Result<(), VrError> {
        self.state_mut(handle)?.width_m = Some(width);
        Ok(())
    }

    fn set_curvature(&mut self, handle: OverlayHandle, curvature: f32) -> Result<(), VrError> {
        self.state_mut(handle)?.curvature = Some(curvature);
        Ok(())
    }

    fn show(&mut self, handle: OverlayHandle) -> Result<(), VrError> {
        self.state_mut(handle)?.visible = true;
        Ok(())
    }

    fn set_absolute_pose(&mut self, handle: OverlayHandle, pose: &Mat4) -> Result<(), VrError> {
        let state = self.state_mut(handle)?;
        state.absolute_pose = Some(*pose);
        log::trace!(
            "[sim] {handle:?} -> ({:.3}, {:.3}, {:.3})",
            pose.w_axis.x,
            pose.w_axis.y,
            pose.w_axis.z
        );
        Ok(())
    }

    fn set_hmd_relative_pose(&mut self, handle: OverlayHandle, pose: &Mat4) -> Result<(), VrError> {
        self.state_mut(handle)?.hmd_relative_pose = Some(*pose);
        Ok(())
    }
}

impl TrackingRuntime for SimRuntime {
    fn is_connected(&self, index: u32) -> bool {
        match index {
            0 => true,
            SIM_STATION_INDEX => self.station.as_ref().is_some_and(|s| s.connected),
            _ => false,
        }
    }

    fn device_class(&self, index: u32) -> DeviceClass {
        match index {
            0 => DeviceClass::Hmd,
            SIM_STATION_INDEX if self.station.is_some() => DeviceClass::TrackingReference,
            _ => DeviceClass::Invalid,
        }
    }

    fn device_serial(&self, index: u32) -> Result<String, VrError> {
        match index {
            SIM_STATION_INDEX => self
                .station
                .as_ref()
                .map(|s| s.serial.clone())
                .ok_or(VrError::NoSerial(index)),
            _ => Err(VrError::NoSerial(index)),
        }
    }

    fn device_pose(&self, index: u32) -> Option<Mat4> {
        match index {
            SIM_STATION_INDEX => self
                .station
                .as_ref()
                .filter(|s| s.connected && s.pose_valid)
                .map(|s| s.pose),
            _ => None,
        }
    }
}
