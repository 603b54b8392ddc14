pub mod payment;
pub mod price;
pub mod token;
