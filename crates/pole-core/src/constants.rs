// Shared tuning constants used by both the host and the panel.

// Tracking
pub const POLE_UPDATE_RATE_HZ: f32 = 10.0; // pole loop ticks per second

// Panel
pub const OFFSET_DISPLAY_DECIMALS: usize = 6; // axis readout precision
pub const NUDGE_STEP_M: f64 = 0.01; // per-click offset step in meters

// Persistence
pub const CONFIG_FILE: &str = "config.json";
