pub mod bridge;
pub mod config;
pub mod constants;
pub mod offset;
pub mod station;
pub mod transform;

pub use bridge::*;
pub use config::*;
pub use constants::*;
pub use offset::*;
pub use station::*;
pub use transform::*;
