pub mod presale_config;
pub mod round_registry;
pub mod user_purchases;

pub use presale_config::*;
pub use round_registry::*;
pub use user_purchases::*;
