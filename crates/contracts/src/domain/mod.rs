pub mod account;
pub mod catalog;
pub mod order;
