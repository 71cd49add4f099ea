pub mod initialize_schedule;
pub mod add_administrator;
pub mod remove_administrator;
pub mod create_allocation;
pub mod increase_allocation;
pub mod decrease_allocation;
pub mod delete_allocation;
pub mod extend_allocation;
pub mod fund;
pub mod remove_funds;
pub mod withdraw;
pub mod get_drawing_power;
pub mod queries;

pub use initialize_schedule::*;
pub use add_administrator::*;
pub use remove_administrator::*;
pub use create_allocation::*;
pub use increase_allocation::*;
pub use decrease_allocation::*;
pub use delete_allocation::*;
pub use extend_allocation::*;
pub use fund::*;
pub use remove_funds::*;
pub use withdraw::*;
pub use get_drawing_power::*;
pub use queries::*;
