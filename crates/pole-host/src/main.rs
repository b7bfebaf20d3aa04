use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use glam::{Mat4, Vec3};
use pole_core::{
    format_axis_value, Axis, OffsetTracker, PoleConfig, CONFIG_FILE, NUDGE_STEP_M,
    POLE_UPDATE_RATE_HZ,
};

use pole_host::bridge::HostBridge;
use pole_host::overlay::HudBadge;
use pole_host::tracker::{self, PoleTracker};
use pole_host::vr::sim::SimRuntime;

const TEXTURE_PATH: &str = "assets/texture.png";
const BADGE_ICON_PATH: &str = "assets/badge.png";
const SIM_STATION_SERIAL: &str = "LHB-SIM0001";

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config_path = PathBuf::from(CONFIG_FILE);
    let mut config = PoleConfig::load_or_create(&config_path)?;
    log::info!("[host] config loaded from {}", config_path.display());

    // Scripted runtime: one station mounted where a wall unit typically is.
    let mut runtime = SimRuntime::with_station(
        SIM_STATION_SERIAL,
        Mat4::from_translation(Vec3::new(1.5, 2.0, -1.0)),
    );

    let station = tracker::discover_and_adopt(&runtime, &mut config, &config_path)?
        .ok_or_else(|| anyhow::anyhow!("no tracking base station connected"))?;
    log::info!("[host] anchoring to {station}");

    let badge = HudBadge::create(&mut runtime, Path::new(BADGE_ICON_PATH))?;
    log::debug!("[host] badge {:?} pinned to the HMD", badge.handle());

    let offset = Arc::new(Mutex::new(config.offset()));
    let host_bridge = HostBridge::new(
        Arc::clone(&offset),
        Arc::new(Mutex::new(config.clone())),
        config_path,
    );

    let pole = PoleTracker::new(
        &mut runtime,
        &config,
        station,
        Path::new(TEXTURE_PATH),
        Arc::clone(&offset),
    )?;
    log::info!("[host] {} overlays registered", runtime.overlay_count());

    // Place the pole once before the loop thread takes the runtime.
    pole.update(&mut runtime)?;
    if let Some(pose) = runtime
        .overlay(pole.right_half_handle())
        .and_then(|state| state.absolute_pose)
    {
        log::info!(
            "[host] pole anchored at ({:.3}, {:.3}, {:.3})",
            pose.w_axis.x,
            pose.w_axis.y,
            pose.w_axis.z
        );
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let loop_shutdown = Arc::clone(&shutdown);
    let tracking = thread::Builder::new().name("pole-tracker".into()).spawn(move || {
        let mut runtime = runtime;
        pole.run(&mut runtime, POLE_UPDATE_RATE_HZ, &loop_shutdown);
    })?;

    // Dry-run: walk a short nudge sequence through the bridge the way the
    // panel would, then persist and stop.
    let mut panel = OffsetTracker::with_offset(config.offset());
    let tick = Duration::from_secs_f32(1.0 / POLE_UPDATE_RATE_HZ);
    for (axis, delta) in [
        (Axis::X, NUDGE_STEP_M),
        (Axis::Y, -2.0 * NUDGE_STEP_M),
        (Axis::Z, NUDGE_STEP_M),
    ] {
        let adjusted = panel.nudge(axis, delta, &host_bridge)?;
        log::info!(
            "[host] {} -> {}",
            adjusted.axis.name(),
            format_axis_value(adjusted.value)
        );
        thread::sleep(tick);
    }
    panel.persist(&host_bridge)?;

    shutdown.store(true, Ordering::SeqCst);
    if tracking.join().is_err() {
        log::error!("[host] tracking thread panicked");
    }
    Ok(())
}
