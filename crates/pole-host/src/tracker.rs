//! Base-station discovery and the fixed-rate pole tracking loop.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use pole_core::{
    anchor_pose, lateral_offset, pole_half_pose, BaseStation, ConfigError, HalfSide, PoleConfig,
    PoleOffset,
};

use crate::overlay::PoleHalf;
use crate::vr::{DeviceClass, OverlayHandle, OverlayRuntime, TrackingRuntime, VrError};

/// Scan for a connected tracking reference.
///
/// With a configured serial only that station matches; otherwise the first
/// one found wins.
pub fn discover_station<R: TrackingRuntime>(
    runtime: &R,
    configured_serial: Option<&str>,
) -> Option<BaseStation> {
    for index in 0..runtime.device_count() {
        if !runtime.is_connected(index) {
            continue;
        }
        if runtime.device_class(index) != DeviceClass::TrackingReference {
            continue;
        }
        let serial = match runtime.device_serial(index) {
            Ok(serial) => serial,
            Err(e) => {
                log::warn!("[tracker] skipping device {index}: {e}");
                continue;
            }
        };
        if let Some(want) = configured_serial {
            if serial != want {
                continue;
            }
        }
        let mut station = BaseStation::new(index, serial);
        station.pose = runtime.device_pose(index);
        return Some(station);
    }
    None
}

/// Find the station the config names, or adopt the first tracking reference
/// found and persist the choice.
pub fn discover_and_adopt<R: TrackingRuntime>(
    runtime: &R,
    config: &mut PoleConfig,
    config_path: &Path,
) -> Result<Option<BaseStation>, ConfigError> {
    let station = match discover_station(runtime, config.base_station_serial.as_deref()) {
        Some(station) => station,
        None => return Ok(None),
    };
    if config.base_station_serial.is_none() {
        config.base_station_serial = Some(station.serial.clone());
        config.save(config_path)?;
        log::info!("[tracker] adopted {station}");
    }
    Ok(Some(station))
}

/// Keeps the two pole halves anchored to the station, offset by the shared
/// record the bridge writes into.
pub struct PoleTracker {
    station: BaseStation,
    right_half: PoleHalf,
    left_half: PoleHalf,
    height: f32,
    lateral: f32,
    offset: Arc<Mutex<PoleOffset>>,
}

impl PoleTracker {
    pub fn new<R: OverlayRuntime>(
        runtime: &mut R,
        config: &PoleConfig,
        station: BaseStation,
        image: &Path,
        offset: Arc<Mutex<PoleOffset>>,
    ) -> Result<Self, VrError> {
        let right_half = PoleHalf::create(runtime, "pole-right", "pole-right", image, config)?;
        let left_half = PoleHalf::create(runtime, "pole-left", "pole-left", image, config)?;
        Ok(Self {
            station,
            right_half,
            left_half,
            height: config.height,
            lateral: lateral_offset(config.size),
            offset,
        })
    }

    /// Handle of the right half, the one sitting exactly on the anchor.
    pub fn right_half_handle(&self) -> OverlayHandle {
        self.right_half.handle()
    }

    /// One tick: reposition both halves from the current station pose.
    /// An invalid pose leaves the previous transforms in place.
    pub fn update<R: OverlayRuntime + TrackingRuntime>(
        &self,
        runtime: &mut R,
    ) -> Result<(), VrError> {
        let Some(pose) = runtime.device_pose(self.station.index) else {
            return Ok(());
        };
        let offset = *self.offset.lock().unwrap();
        let anchor = anchor_pose(pose, &offset);
        self.right_half.set_pose(
            runtime,
            &pole_half_pose(anchor, HalfSide::Right, self.height, self.lateral),
        )?;
        self.left_half.set_pose(
            runtime,
            &pole_half_pose(anchor, HalfSide::Left, self.height, self.lateral),
        )?;
        Ok(())
    }

    /// Tick at `rate_hz` until the shutdown flag is raised, sleeping the
    /// remainder of each tick.
    pub fn run<R: OverlayRuntime + TrackingRuntime>(
        &self,
        runtime: &mut R,
        rate_hz: f32,
        shutdown: &AtomicBool,
    ) {
        let tick = Duration::from_secs_f32(1.0 / rate_hz);
        while !shutdown.load(Ordering::SeqCst) {
            let start = Instant::now();
            if let Err(e) = self.update(runtime) {
                log::error!("[tracker] update failed: {e}");
            }
            if let Some(remaining) = tick.checked_sub(start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        log::info!("[tracker] loop stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vr::sim::{SimRuntime, SIM_STATION_INDEX};
    use glam::{Mat4, Quat, Vec3};

    fn station_pose() -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_rotation_y(1.1),
            Vec3::new(1.5, 2.0, -1.0),
        )
    }

    #[test]
    fn discovery_adopts_first_station_and_saves_once() {
        let sim = SimRuntime::with_station("LHB-AAA111", station_pose());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = PoleConfig::default();

        let station = discover_and_adopt(&sim, &mut config, &path)
            .unwrap()
            .expect("station adopted");
        assert_eq!(station.index, SIM_STATION_INDEX);
        assert_eq!(station.serial, "LHB-AAA111");
        assert_eq!(config.base_station_serial.as_deref(), Some("LHB-AAA111"));

        let on_disk = PoleConfig::load(&path).unwrap();
        assert_eq!(on_disk.base_station_serial.as_deref(), Some("LHB-AAA111"));
    }

    #[test]
    fn discovery_rejects_mismatched_serial() {
        let sim = SimRuntime::with_station("LHB-AAA111", station_pose());
        assert!(discover_station(&sim, Some("LHB-OTHER")).is_none());
        assert!(discover_station(&sim, Some("LHB-AAA111")).is_some());
    }

    #[test]
    fn matched_serial_does_not_rewrite_config() {
        let sim = SimRuntime::with_station("LHB-AAA111", station_pose());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = PoleConfig {
            base_station_serial: Some("LHB-AAA111".to_string()),
            ..Default::default()
        };

        discover_and_adopt(&sim, &mut config, &path)
            .unwrap()
            .expect("station found");
        assert!(!path.exists(), "config must not be rewritten on a match");
    }

    #[test]
    fn update_positions_both_halves_from_translation_only() {
        let mut sim = SimRuntime::with_station("LHB-AAA111", station_pose());
        let config = PoleConfig::default();
        let station = discover_station(&sim, None).unwrap();
        let offset = Arc::new(Mutex::new(PoleOffset::new(0.5, 0.0, -0.25)));
        let tracker =
            PoleTracker::new(&mut sim, &config, station, Path::new("texture.png"), offset)
                .unwrap();

        tracker.update(&mut sim).unwrap();

        let right = sim
            .overlay(tracker.right_half.handle())
            .unwrap()
            .absolute_pose
            .expect("right half placed");
        let left = sim
            .overlay(tracker.left_half.handle())
            .unwrap()
            .absolute_pose
            .expect("left half placed");

        // Station rotation is discarded; translation carries pose + offset.
        assert!((right.w_axis.x - 2.0).abs() < 1e-6);
        assert!((right.w_axis.y - 2.0).abs() < 1e-6);
        assert!((right.w_axis.z - -1.25).abs() < 1e-6);
        // Left half is shifted by the lateral seam offset only.
        let lateral = lateral_offset(config.size);
        assert!((left.w_axis.x - (2.0 + lateral)).abs() < 1e-6);
        assert_eq!(left.w_axis.y, right.w_axis.y);
        assert_eq!(left.w_axis.z, right.w_axis.z);
        // Both rise by 1 + height.
        assert_eq!(right.y_axis.y, 1.0 + config.height);
        assert_eq!(left.y_axis.y, 1.0 + config.height);
    }

    #[test]
    fn invalid_pose_leaves_halves_untouched() {
        let mut sim = SimRuntime::with_station("LHB-AAA111", station_pose());
        let config = PoleConfig::default();
        let station = discover_station(&sim, None).unwrap();
        let offset = Arc::new(Mutex::new(PoleOffset::default()));
        let tracker =
            PoleTracker::new(&mut sim, &config, station, Path::new("texture.png"), offset)
                .unwrap();

        sim.set_pose_valid(false);
        tracker.update(&mut sim).unwrap();
        assert!(sim
            .overlay(tracker.right_half.handle())
            .unwrap()
            .absolute_pose
            .is_none());

        sim.set_pose_valid(true);
        tracker.update(&mut sim).unwrap();
        assert!(sim
            .overlay(tracker.right_half.handle())
            .unwrap()
            .absolute_pose
            .is_some());
    }

    #[test]
    fn tracker_follows_shared_offset_updates() {
        let mut sim = SimRuntime::with_station("LHB-AAA111", Mat4::IDENTITY);
        let config = PoleConfig::default();
        let station = discover_station(&sim, None).unwrap();
        let offset = Arc::new(Mutex::new(PoleOffset::default()));
        let tracker = PoleTracker::new(
            &mut sim,
            &config,
            station,
            Path::new("texture.png"),
            Arc::clone(&offset),
        )
        .unwrap();

        tracker.update(&mut sim).unwrap();
        let before = sim
            .overlay(tracker.right_half.handle())
            .unwrap()
            .absolute_pose
            .unwrap();
        assert_eq!(before.w_axis.x, 0.0);

        *offset.lock().unwrap() = PoleOffset::new(0.25, 0.0, 0.0);
        tracker.update(&mut sim).unwrap();
        let after = sim
            .overlay(tracker.right_half.handle())
            .unwrap()
            .absolute_pose
            .unwrap();
        assert!((after.w_axis.x - 0.25).abs() < 1e-6);
    }
}
