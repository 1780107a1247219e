mod cli;
pub mod demo;
mod error;

pub use cli::Cli;
pub use error::{Error, Kind};
