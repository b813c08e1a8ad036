pub mod register_couple;
pub mod counter_deposit;
pub mod refund_deposit;
pub mod submit_dissolution;
pub mod accept_dissolution;
pub mod dispute_dissolution;
pub mod conclude_arbitration;
pub mod close_couple;

pub use register_couple::*;
pub use counter_deposit::*;
pub use refund_deposit::*;
pub use submit_dissolution::*;
pub use accept_dissolution::*;
pub use dispute_dissolution::*;
pub use conclude_arbitration::*;
pub use close_couple::*;
