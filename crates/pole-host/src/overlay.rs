//! The overlays the host manages: the two pole halves and the HUD badge.

use std::path::Path;

use glam::Mat4;
use pole_core::{hud_pose, rgb_to_normalized, PoleConfig};

use crate::vr::{OverlayHandle, OverlayRuntime, VrError};

// Badge placement, HMD-relative.
const BADGE_X: f32 = 0.0;
const BADGE_Y: f32 = -0.2;
const BADGE_DEPTH: f32 = 1.0;
const BADGE_WIDTH_M: f32 = 0.2;
const BADGE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const BADGE_ALPHA: f32 = 1.0;

/// One curved half of the pole cylinder.
pub struct PoleHalf {
    handle: OverlayHandle,
}

impl PoleHalf {
    /// Create the overlay and apply its full appearance from the config.
    pub fn create<R: OverlayRuntime>(
        runtime: &mut R,
        key: &str,
        name: &str,
        image: &Path,
        config: &PoleConfig,
    ) -> Result<Self, VrError> {
        let handle = runtime.create_overlay(key, name)?;
        runtime.set_image(handle, image)?;
        runtime.set_color(handle, rgb_to_normalized(config.color))?;
        runtime.set_alpha(handle, config.transparency)?;
        runtime.set_width_m(handle, config.size)?;
        runtime.set_curvature(handle, 1.0)?;
        runtime.show(handle)?;
        Ok(Self { handle })
    }

    pub fn handle(&self) -> OverlayHandle {
        self.handle
    }

    pub fn set_pose<R: OverlayRuntime>(
        &self,
        runtime: &mut R,
        pose: &Mat4,
    ) -> Result<(), VrError> {
        runtime.set_absolute_pose(self.handle, pose)
    }
}

/// Small HMD-anchored icon shown while the host is running.
pub struct HudBadge {
    handle: OverlayHandle,
}

impl HudBadge {
    pub fn create<R: OverlayRuntime>(runtime: &mut R, image: &Path) -> Result<Self, VrError> {
        let handle = runtime.create_overlay("badge", "badge")?;
        runtime.set_image(handle, image)?;
        runtime.set_color(handle, BADGE_COLOR)?;
        runtime.set_alpha(handle, BADGE_ALPHA)?;
        runtime.set_width_m(handle, BADGE_WIDTH_M * BADGE_DEPTH)?;
        runtime.set_hmd_relative_pose(handle, &hud_pose(BADGE_X, BADGE_Y, BADGE_DEPTH))?;
        runtime.show(handle)?;
        Ok(Self { handle })
    }

    pub fn handle(&self) -> OverlayHandle {
        self.handle
    }
}
