//! Script discovery and decoding

mod discover;
mod reader;

pub use discover::discover_scripts;
pub use reader::read_script;
