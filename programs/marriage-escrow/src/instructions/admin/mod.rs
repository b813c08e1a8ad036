pub mod initialize;
pub mod add_juror;
pub mod remove_juror;
pub mod views;

pub use initialize::*;
pub use add_juror::*;
pub use remove_juror::*;
pub use views::*;
