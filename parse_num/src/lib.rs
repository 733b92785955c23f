// SPDX-FileCopyrightText: © 2019 Robin Ole Heinemann <robin.ole.heinemann@gmail.com>
// SPDX-License-Identifier: AGPL-3.0-only

use failure::Fail;

pub mod base_conv;
pub mod literal;

pub use base_conv::{Base, BaseConv};
pub use literal::{parse_hexdump, parse_number};

#[derive(Debug, Fail, Clone, PartialEq)]
pub enum ParseError {
    #[fail(display = "empty literal")]
    EmptyInput,
    #[fail(display = "unsupported base {}, expected one of 2, 8, 10 or 16", _0)]
    UnsupportedBase(u32),
    #[fail(display = "{} does not fit into 64 bits", _0)]
    Range(String),
    #[fail(display = "invalid digits {} for radix {}", digits, radix)]
    InvalidDigits { digits: String, radix: u32 },
}
