pub mod amount;
pub mod csv;
pub mod machine;
pub mod model;

pub use amount::Amount;
pub use machine::{AccountRecord, AccountStateMachine, Notice, Rejection, Transition, apply};
pub use model::Operation;
