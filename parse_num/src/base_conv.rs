// SPDX-FileCopyrightText: © 2019 Robin Ole Heinemann <robin.ole.heinemann@gmail.com>
// SPDX-License-Identifier: AGPL-3.0-only

use crate::ParseError;
use lazy_static::lazy_static;
use num::{BigInt, Num, ToPrimitive};
use regex::Regex;
use std::{convert::TryFrom, fmt};

// 64 bit is the widest integer we can show
const MAX_SIZE: u32 = 8;

const SIZE_UNITS: [&str; 9] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

const PERM_FLAGS: [char; 3] = ['r', 'w', 'x'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    // only meaningful for radix 2^n
    fn bits_per_digit(self) -> usize {
        (0u32.leading_zeros() - (self.radix() - 1).leading_zeros()) as usize
    }
}

impl TryFrom<u32> for Base {
    type Error = ParseError;

    fn try_from(radix: u32) -> Result<Self, ParseError> {
        match radix {
            2 => Ok(Base::Binary),
            8 => Ok(Base::Octal),
            10 => Ok(Base::Decimal),
            16 => Ok(Base::Hexadecimal),
            other => Err(ParseError::UnsupportedBase(other)),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Base::Binary => write!(f, "0b"),
            Base::Octal => write!(f, "0o"),
            Base::Decimal => write!(f, ""),
            Base::Hexadecimal => write!(f, "0x"),
        }
    }
}

/// A literal fitted into the smallest two's complement integer (8, 16, 32 or
/// 64 bit) that can hold it.
///
/// For binary, octal and hex literals the width follows the number of digits
/// written, so leading zeros count as padding (`0x0001` is 16 bit). Decimal
/// literals are sized by magnitude only, negative values by the smallest signed
/// type that holds them.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseConv {
    base: Base,
    size: u32,
    uint: u64,
    int: i64,
    value: i128,
}

impl BaseConv {
    pub fn new(literal: &str, radix: u32) -> Result<BaseConv, ParseError> {
        lazy_static! {
            // digit separators, suffixes, prefixes: everything that is not a digit or a sign
            static ref NOISE: Regex = Regex::new(r"[^0-9A-Fa-f+-]").unwrap();
        }

        let digits = NOISE.replace_all(literal, "");
        if digits.is_empty() {
            return Err(ParseError::EmptyInput)
        }

        let base = Base::try_from(radix)?;
        let value = fit_64_bits(parse_digits(&digits, base)?)?;

        let size = if value >= 0 {
            match base {
                Base::Decimal => size_for_bits(bit_length(value as u128)),
                _ => size_for_bits(digits.len() * base.bits_per_digit()),
            }
        } else {
            size_for_bits(bit_length(((-value - 1) * 2) as u128))
        };

        let width = size * 8;
        let modulus = 1i128 << width;
        let uint = value.rem_euclid(modulus);
        let int = if uint >= modulus / 2 { uint - modulus } else { uint };

        Ok(BaseConv { base, size, uint: uint as u64, int: int as i64, value })
    }

    pub fn base(&self) -> Base { self.base }

    /// width in bytes, one of 1, 2, 4, 8
    pub fn size(&self) -> u32 { self.size }

    pub fn width(&self) -> u32 { self.size * 8 }

    pub fn uint(&self) -> u64 { self.uint }

    pub fn int(&self) -> i64 { self.int }

    // the literal as written, before fitting it into `width` bits
    pub fn value(&self) -> i128 { self.value }

    pub fn to_hex(&self) -> String {
        format!("{:0width$X}", self.uint, width = (self.width() / 4) as usize)
    }

    pub fn to_bin(&self) -> String {
        format!("{:0width$b}", self.uint, width = self.width() as usize)
    }

    pub fn to_uint(&self) -> String { separated(&self.uint.to_string()) }

    pub fn to_int(&self) -> String { separated(&self.int.to_string()) }

    pub fn to_gmk(&self) -> String {
        // floor(log2(uint + 1)) / 10, the number of whole 1024 steps
        let index = ((bit_length(u128::from(self.uint) + 1) - 1) / 10).min(SIZE_UNITS.len() - 1);

        if index == 0 {
            format!("{} {}", self.uint, SIZE_UNITS[0])
        } else {
            // exact halves round up
            let scaled = self.uint as f64 / 1024f64.powi(index as i32);
            format!("{:.3} {}", (scaled * 1000.0).round() / 1000.0, SIZE_UNITS[index])
        }
    }

    /// Reads the value as `rwxrwxrwx` unix permission bits, `None` outside of
    /// `0..=0o777`.
    pub fn to_perm(&self, sep: &str) -> Option<String> {
        if self.value < 0 || self.value > 0o777 {
            return None
        }

        let perm: Vec<String> = format!("{:09b}", self.value)
            .chars()
            .enumerate()
            .map(|(i, bit)| if bit == '1' { PERM_FLAGS[i % 3] } else { '-' })
            .map(String::from)
            .collect();

        Some(perm.join(sep))
    }

    // big endian, `size` bytes
    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        let mut value = self.value;
        let mut bytes = vec![0u8; self.size as usize];

        for b in bytes.iter_mut().rev() {
            *b = (value & 0xff) as u8;
            value >>= 8;
        }

        bytes
    }

    pub fn to_ascii(&self, na: char) -> String {
        self.to_bytes().into_iter().map(|b| if is_printable(b) { b as char } else { na }).collect()
    }

    pub fn to_ascii_code(&self) -> String {
        self.to_bytes().iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", ")
    }
}

fn parse_digits(digits: &str, base: Base) -> Result<BigInt, ParseError> {
    let invalid =
        || ParseError::InvalidDigits { digits: digits.to_string(), radix: base.radix() };

    // a sign is only part of decimal literals
    if base != Base::Decimal && digits.contains(|c: char| c == '+' || c == '-') {
        return Err(invalid())
    }

    BigInt::from_str_radix(digits, base.radix()).map_err(|_| invalid())
}

fn fit_64_bits(value: BigInt) -> Result<i128, ParseError> {
    match value.to_i128() {
        Some(v) if v >= i128::from(i64::MIN) && v <= i128::from(u64::MAX) => Ok(v),
        _ => Err(ParseError::Range(value.to_string())),
    }
}

// number of bits needed to write `v`, 0 for 0
fn bit_length(v: u128) -> usize { (128 - v.leading_zeros()) as usize }

fn size_for_bits(bits: usize) -> u32 {
    let bytes = (bits + 7) / 8;
    (bytes.max(1).next_power_of_two() as u32).min(MAX_SIZE)
}

fn separated(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut out = String::from(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

fn is_printable(b: u8) -> bool { (32..127).contains(&b) }
