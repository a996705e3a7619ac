pub mod args;
pub mod commands;
mod config;
mod error;
pub mod export;
mod fs;
pub mod gate;
pub mod model;
mod notify;
pub mod report;
mod store;

pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use store::RecordStore;
