pub mod drawing_power;
pub mod funding;
pub mod time;
pub mod withdrawal;
