pub mod logging;
pub use logging::*;

mod vec2;
pub use vec2::*;

// Re-export so downstream crates can use base::log::* without their own dependency
pub use log;
