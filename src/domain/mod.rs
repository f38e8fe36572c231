pub mod filter;
pub mod property;
