pub mod cli;
pub mod config;
mod env;
pub mod indexer;
pub mod log;
mod performance;
pub mod ranking;
mod top_holders;

pub use config::Config;
pub use top_holders::report_top_holders;
pub use top_holders::run;
