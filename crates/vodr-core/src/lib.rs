pub mod config;
pub mod dispatcher;
pub mod error;
pub mod models;
pub mod page;
pub mod store;
pub mod template;
