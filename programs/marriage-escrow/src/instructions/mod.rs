pub mod admin;
pub mod couple;
pub mod jury;

pub use admin::*;
pub use couple::*;
pub use jury::*;
