pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod meals;
pub mod nutrition;
pub mod records;
pub mod session;
pub mod state;
pub mod storage;
