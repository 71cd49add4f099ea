pub mod ledger;
pub mod schedule_state;

pub use ledger::*;
pub use schedule_state::*;
