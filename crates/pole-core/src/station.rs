use std::fmt;

use glam::Mat4;

/// A tracked reference device the pole anchors to.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseStation {
    pub index: u32,
    pub serial: String,
    /// Pose captured at discovery time, when the runtime had one.
    pub pose: Option<Mat4>,
}

impl BaseStation {
    pub fn new(index: u32, serial: impl Into<String>) -> Self {
        Self {
            index,
            serial: serial.into(),
            pose: None,
        }
    }
}

impl fmt::Display for BaseStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "station {} (device {})", self.serial, self.index)
    }
}
