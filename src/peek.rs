// SPDX-FileCopyrightText: © 2019 Robin Ole Heinemann <robin.ole.heinemann@gmail.com>
// SPDX-License-Identifier: AGPL-3.0-only

use crate::{config::Config, info::render_all};
use ::log::{debug, trace};
use lazy_static::lazy_static;
use parse_num::{parse_hexdump, parse_number, BaseConv};
use regex::Regex;

pub fn parse_text(text: &str, c: &Config) -> Option<BaseConv> {
    if c.force_hex {
        parse_hexdump(text)
    } else {
        parse_number(text)
    }
}

// the word touching char `column` of `line`, a cursor right behind a word
// still selects it
//
// `#`, `+` and `-` only start a word when they do not follow another word,
// so `n-1` holds the words `n` and `1`
pub fn word_at(line: &str, column: usize) -> Option<&str> {
    lazy_static! {
        static ref WORD: Regex =
            Regex::new(r"(?:^|[^0-9A-Za-z_])(?P<word>[#+\-]?[0-9A-Za-z_]+)").unwrap();
    }

    let offset = if column == line.chars().count() {
        line.len()
    } else {
        line.char_indices().nth(column)?.0
    };

    WORD.captures_iter(line)
        .filter_map(|c| c.name("word"))
        .find(|m| m.start() <= offset && offset <= m.end())
        .map(|m| m.as_str())
}

pub fn peek(v: &BaseConv, c: &Config) -> String { render_all(v, c).join("\n") }

/// Everything a hover over `column` of `line` shows, `None` when there is no
/// number under the cursor.
pub fn peek_at(line: &str, column: usize, c: &Config) -> Option<String> {
    let word = word_at(line, column)?;
    trace!("word at {}: {}", column, word);

    match parse_text(word, c) {
        Some(v) => Some(peek(&v, c)),
        None => {
            debug!("{} is not a number", word);
            None
        }
    }
}

pub fn force_hex_notice(c: &Config) -> String {
    format!("Bit Peek: force HEX mode is {}.", if c.force_hex { "enabled" } else { "disabled" })
}
