// SPDX-FileCopyrightText: © 2019 Robin Ole Heinemann <robin.ole.heinemann@gmail.com>
// SPDX-License-Identifier: AGPL-3.0-only

use crate::BaseConv;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

struct Rule {
    re: Regex,
    base: u32,
}

impl Rule {
    fn new(pattern: &str, base: u32) -> Rule {
        Rule { re: Regex::new(&format!("(?i){}", pattern)).unwrap(), base }
    }
}

// C/C++ `u`, `l`, `ul`, `ull`; JS bigint `n`; rust `i8` .. `usize`
const C_SUFFIX: &str = r"u?l{0,2}|n";
const RUST_SUFFIX: &str = r"(?:i|u)(?:8|16|32|64|128|size)";

lazy_static! {
    // the first match wins, decimal has to come last as it would also eat
    // `0123` (octal) and similar forms
    static ref NUMBER_RULES: Vec<Rule> = vec![
        // hex: C/C++/rust/JS, css/verilog, nasm
        Rule::new(&format!(r"^0x(?P<num>[0-9a-f_]+)(?:{}|{})?$", C_SUFFIX, RUST_SUFFIX), 16),
        Rule::new(r"^(?:#|0h|h|sh)(?P<num>[0-9a-f_]+)$", 16),
        Rule::new(r"^(?P<num>[0-9a-f_]+)h$", 16),

        // oct: rust, verilog, nasm, C/C++/JS
        Rule::new(&format!(r"^0o(?P<num>[0-7_]+){}$", RUST_SUFFIX), 8),
        Rule::new(r"^(?:o|so)(?P<num>[0-7_]+)$", 8),
        Rule::new(r"^(?P<num>[0-7_]+)o$", 8),
        Rule::new(&format!(r"^(?:0|0o)(?P<num>[0-7_]+)(?:{})?$", C_SUFFIX), 8),

        // bin
        Rule::new(&format!(r"^0b(?P<num>[01_]+)(?:{}|{})?$", C_SUFFIX, RUST_SUFFIX), 2),
        Rule::new(r"^(?:b|sb)(?P<num>[01_]+)$", 2),
        Rule::new(r"^(?P<num>[01_]+)b$", 2),

        // dec
        Rule::new(&format!(r"^(?P<num>[+-]?[0-9_]+)(?:{}|{})?$", C_SUFFIX, RUST_SUFFIX), 10),
        Rule::new(r"^(?:0d|d|sd)(?P<num>[0-9_]+)$", 10),
        Rule::new(r"^(?P<num>[+-]?[0-9_]+)d$", 10),
    ];

    static ref HEXDUMP_RULES: Vec<Rule> = vec![
        Rule::new(&format!(r"^(?:0x)?(?P<num>[0-9a-f_]+)(?:{})?$", C_SUFFIX), 16),
        Rule::new(r"^(?:#|0h|h|sh)(?P<num>[0-9a-f_]+)$", 16),
        Rule::new(r"^(?P<num>[0-9a-f_]+)h$", 16),
    ];
}

fn parse_table(s: &str, rules: &[Rule]) -> Option<BaseConv> {
    let (rule, captures) = rules.iter().find_map(|rule| rule.re.captures(s).map(|c| (rule, c)))?;
    let num = captures.name("num")?.as_str();

    // a literal that matched but does not convert is not retried with the
    // remaining rules
    match BaseConv::new(num, rule.base) {
        Ok(v) => {
            debug!("{} matched {} as {}-bit base {} literal", s, rule.re, v.width(), rule.base);
            Some(v)
        }
        Err(e) => {
            debug!("{} matched {} but could not be converted: {}", s, rule.re, e);
            None
        }
    }
}

/// Recognizes integer literals of C/C++, rust, JS, verilog, nasm and css.
pub fn parse_number(s: &str) -> Option<BaseConv> { parse_table(s, &NUMBER_RULES) }

/// Like [`parse_number`], but reads every plausible run of hex digits as hex,
/// prefixed or not.
pub fn parse_hexdump(s: &str) -> Option<BaseConv> { parse_table(s, &HEXDUMP_RULES) }
