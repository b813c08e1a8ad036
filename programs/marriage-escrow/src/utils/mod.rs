pub mod funds;
pub mod math;

pub use funds::*;
pub use math::*;
