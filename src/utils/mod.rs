pub mod json;
pub mod time;

pub use time::sleep_with_jitter;
