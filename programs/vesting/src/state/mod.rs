pub mod recipient_vestings;
pub mod vesting_config;
pub mod vesting_schedule;

pub use recipient_vestings::*;
pub use vesting_config::*;
pub use vesting_schedule::*;
