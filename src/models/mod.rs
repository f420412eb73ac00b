pub mod error;
pub mod filter;
pub mod market;
pub mod room;
