//! Command implementations behind the `inflationrate` binary.

mod get;
mod info;

pub use get::{GetOptions, OutputFormat, get, print_data};
pub use info::{info, print_info};
