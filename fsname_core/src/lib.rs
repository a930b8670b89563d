extern crate regex;
extern crate serde;
extern crate toml;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

pub mod error;
pub use error::FsNameError;

pub mod charmap;
pub mod cleanup;
pub mod codec;
pub mod config;

pub mod sanitize;
pub use cleanup::DEFAULT_FILE_NAME;
pub use sanitize::{is_valid_file_name, sanitize_file_name, sanitize_file_name_with_max_length};
