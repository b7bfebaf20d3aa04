//! Seam over the VR runtime.
//!
//! The overlay compositor and the tracking system are external collaborators;
//! everything the host needs from them sits behind these two traits so the
//! tracking logic runs against any backend, including the in-memory one in
//! [`sim`].

pub mod sim;

use std::path::Path;

use glam::Mat4;
use thiserror::Error;

/// Upper bound on tracked device indices a runtime reports.
pub const MAX_TRACKED_DEVICES: u32 = 64;

/// Opaque identifier for one created overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayHandle(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Hmd,
    Controller,
    TrackingReference,
    GenericTracker,
    Invalid,
}

#[derive(Debug, Error)]
pub enum VrError {
    #[error("overlay `{key}` could not be created: {reason}")]
    OverlayCreate { key: String, reason: String },
    #[error("unknown overlay handle {0:?}")]
    UnknownHandle(OverlayHandle),
    #[error("device {0} has no readable serial")]
    NoSerial(u32),
}

/// Overlay compositor surface.
pub trait OverlayRuntime {
    fn create_overlay(&mut self, key: &str, name: &str) -> Result<OverlayHandle, VrError>;
    fn set_image(&mut self, handle: OverlayHandle, path: &Path) -> Result<(), VrError>;
    fn set_color(&mut self, handle: OverlayHandle, rgb: [f32; 3]) -> Result<(), VrError>;
    fn set_alpha(&mut self, handle: OverlayHandle, alpha: f32) -> Result<(), VrError>;
    fn set_width_m(&mut self, handle: OverlayHandle, width: f32) -> Result<(), VrError>;
    fn set_curvature(&mut self, handle: OverlayHandle, curvature: f32) -> Result<(), VrError>;
    fn show(&mut self, handle: OverlayHandle) -> Result<(), VrError>;
    /// Place an overlay in the standing tracking universe.
    fn set_absolute_pose(&mut self, handle: OverlayHandle, pose: &Mat4) -> Result<(), VrError>;
    /// Pin an overlay relative to the headset.
    fn set_hmd_relative_pose(&mut self, handle: OverlayHandle, pose: &Mat4) -> Result<(), VrError>;
}

/// Tracked-device queries.
pub trait TrackingRuntime {
    fn device_count(&self) -> u32 {
        MAX_TRACKED_DEVICES
    }
    fn is_connected(&self, index: u32) -> bool;
    fn device_class(&self, index: u32) -> DeviceClass;
    fn device_serial(&self, index: u32) -> Result<String, VrError>;
    /// Standing-universe pose, or `None` while the runtime reports the pose
    /// invalid.
    fn device_pose(&self, index: u32) -> Option<Mat4>;
}
