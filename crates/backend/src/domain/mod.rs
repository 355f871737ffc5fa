pub mod account;
pub mod category;
pub mod imported_stock;
pub mod order;
pub mod product;
