//! Pose math for anchoring the pole to a base station.
//!
//! The runtime hands back full device poses; the pole only wants the
//! station's position, so the rotation is dropped and each half gets a fixed
//! basis of its own. All matrices are world-space, standing tracking origin.

use glam::{Mat4, Vec3, Vec4};

use crate::offset::PoleOffset;

/// Which half of the pole cylinder a transform is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HalfSide {
    Left,
    Right,
}

/// Lateral shift between the two halves so their curved edges meet:
/// overlay width spread over half the circumference.
pub fn lateral_offset(size: f32) -> f32 {
    size / std::f32::consts::PI
}

/// Drop the rotation from a device pose, keeping only its translation.
pub fn translation_only(pose: Mat4) -> Mat4 {
    let mut m = Mat4::ZERO;
    m.w_axis = pose.w_axis;
    m
}

/// Where the pole stands: the station position plus the panel-adjusted
/// offset record.
pub fn anchor_pose(station_pose: Mat4, offset: &PoleOffset) -> Mat4 {
    let mut m = translation_only(station_pose);
    m.w_axis.x += offset.x as f32;
    m.w_axis.y += offset.y as f32;
    m.w_axis.z += offset.z as f32;
    m
}

/// Final overlay transform for one half: fixed per-side basis facing
/// opposite lateral directions, vertical basis stretched by `1 + height`,
/// left half shifted sideways so the seam lines up.
pub fn pole_half_pose(anchor: Mat4, side: HalfSide, height: f32, lateral: f32) -> Mat4 {
    let rise = 1.0 + height;
    let mut m = anchor;
    match side {
        HalfSide::Right => {
            m.x_axis = Vec4::new(0.0, 0.0, -1.0, 0.0);
            m.z_axis = Vec4::new(1.0, 0.0, 0.0, 0.0);
        }
        HalfSide::Left => {
            m.x_axis = Vec4::new(0.0, 0.0, 1.0, 0.0);
            m.z_axis = Vec4::new(-1.0, 0.0, 0.0, 0.0);
            m.w_axis.x += lateral;
        }
    }
    m.y_axis = Vec4::new(0.0, rise, 0.0, 0.0);
    m
}

/// HMD-relative pose for the status badge: identity basis, pushed `depth`
/// meters forward and scaled across the view plane.
pub fn hud_pose(x: f32, y: f32, depth: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x * depth, y * depth, -depth))
}
