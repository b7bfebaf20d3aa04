//! Offset state shared between the panel and the host.
//!
//! The tracker owns the live record; every mutation goes through it so the
//! full record can be handed to the bridge in one piece. These types avoid
//! platform-specific APIs and are suitable for both native and web targets.

use serde::{Deserialize, Serialize};

use crate::bridge::{BridgeError, PoleBridge};
use crate::constants::OFFSET_DISPLAY_DECIMALS;

/// One of the three adjustable axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Stable lowercase name, used to key DOM element ids and config fields.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// The three-field position adjustment applied to the pole anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoleOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PoleOffset {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn add(&mut self, axis: Axis, delta: f64) {
        match axis {
            Axis::X => self.x += delta,
            Axis::Y => self.y += delta,
            Axis::Z => self.z += delta,
        }
    }
}

/// Result of a single nudge: the touched axis, its new value, and the full
/// record as it was handed to the bridge.
#[derive(Clone, Copy, Debug)]
pub struct Adjustment {
    pub axis: Axis,
    pub value: f64,
    pub offset: PoleOffset,
}

/// Owns the live offset record for one panel session.
#[derive(Clone, Debug, Default)]
pub struct OffsetTracker {
    offset: PoleOffset,
}

impl OffsetTracker {
    /// Fresh tracker with all fields zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(offset: PoleOffset) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> PoleOffset {
        self.offset
    }

    /// Add `delta` to one axis, then ask the host to apply the full record.
    ///
    /// The mutation sticks even when the bridge call fails; the record and
    /// the display stay in step with what the user requested.
    pub fn nudge<B: PoleBridge>(
        &mut self,
        axis: Axis,
        delta: f64,
        bridge: &B,
    ) -> Result<Adjustment, BridgeError> {
        self.offset.add(axis, delta);
        let snapshot = self.offset;
        bridge.apply_offset(&snapshot)?;
        Ok(Adjustment {
            axis,
            value: snapshot.get(axis),
            offset: snapshot,
        })
    }

    /// Ask the host to persist its configuration. Carries no payload and is
    /// independent of any prior adjustments.
    pub fn persist<B: PoleBridge>(&self, bridge: &B) -> Result<(), BridgeError> {
        bridge.save_config()
    }
}

/// Panel readout formatting: exactly six decimal places.
pub fn format_axis_value(value: f64) -> String {
    format!("{value:.prec$}", prec = OFFSET_DISPLAY_DECIMALS)
}
