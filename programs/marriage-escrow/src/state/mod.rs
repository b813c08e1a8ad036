pub mod registry;
pub mod couple;
pub mod jury;
pub mod vote_case;

#[cfg(test)]
mod proptests;

pub use registry::*;
pub use couple::*;
pub use jury::*;
pub use vote_case::*;
