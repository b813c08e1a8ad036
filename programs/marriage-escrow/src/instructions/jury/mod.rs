pub mod cast_vote;
pub mod get_result;

pub use cast_vote::*;
pub use get_result::*;
