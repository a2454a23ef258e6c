pub mod api;
pub mod config;
pub mod error;
pub mod presenter;
pub mod profile;
pub mod resolver;
pub mod session;
pub mod username;
