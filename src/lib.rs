pub mod config;
pub mod info;
pub mod layout;
pub mod peek;
mod serde_util;
mod test;

pub use parse_num::{parse_hexdump, parse_number, Base, BaseConv, ParseError};
