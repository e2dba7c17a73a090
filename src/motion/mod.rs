pub mod constants;
pub mod cursor;
pub mod error;
pub mod reveal;
pub mod scroll;
pub mod spring;
pub mod tilt;

pub use cursor::*;
pub use error::MotionError;
pub use reveal::*;
pub use scroll::*;
pub use spring::*;
pub use tilt::*;
