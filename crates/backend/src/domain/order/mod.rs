pub mod detail;
pub mod repository;
pub mod service;
