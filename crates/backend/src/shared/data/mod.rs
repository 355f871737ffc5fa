pub mod crud;
pub mod db;
pub mod uow;
