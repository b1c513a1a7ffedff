mod connection;
mod error;
mod generator;
mod naming;
pub mod prompt;
mod runner;
mod writer;

pub use connection::*;
pub use error::Error;
pub use generator::*;
pub use naming::{abbreviate, output_file_name};
pub use runner::*;
pub use writer::{write_crs, CONNECTION_VALUE};
