// SPDX-FileCopyrightText: © 2019 Robin Ole Heinemann <robin.ole.heinemann@gmail.com>
// SPDX-License-Identifier: AGPL-3.0-only

use crate::{
    config::Config,
    layout::{bits_label, bits_ruler, group_by},
};
use ::log::trace;
use parse_num::{Base, BaseConv};

// lines following the first one are aligned behind `Bin: `
const INDENT: &str = "     ";

// values wider than this get their ascii codes on a separate line
pub const STR_MAX_WIDTH: usize = 32;

pub const ALL_VIEWS_DISABLED: &str = "Bit Peek: all views are disabled.";
pub const FORCE_HEX_MARKER: &str = "\n[Force HEX Mode]";

fn bin_info_1row(bin: &str, c: &Config, width: usize, group: usize) -> String {
    if c.raw_bits {
        return group_by(bin, group)
    }

    let lsb0 = !c.msb0;
    format!(
        "{}\n{indent}{}\n{indent}{}\n",
        group_by(bin, group),
        group_by(&bits_ruler(width, group, lsb0), group),
        group_by(&bits_label(width, group, 0, lsb0), group),
        indent = INDENT,
    )
}

// upper half on the first row, lower half on the second, each labeled on the
// side closer to it
fn bin_info_2rows(bin: &str, c: &Config, width: usize, group: usize) -> String {
    let w = width / 2;
    let (high, low) = bin.split_at(w);

    if c.raw_bits {
        return format!("{}\n{}{}", group_by(high, group), INDENT, group_by(low, group))
    }

    let lsb0 = !c.msb0;
    let ruler = group_by(&bits_ruler(w, group, lsb0), group);
    let (top, bottom) = if lsb0 { (w, 0) } else { (0, w) };

    format!(
        "{}\n{indent}{ruler}\n{indent}{}\n{indent}{}\n{indent}{ruler}\n{indent}{}\n",
        group_by(&bits_label(w, group, top, lsb0), group),
        group_by(high, group),
        group_by(low, group),
        group_by(&bits_label(w, group, bottom, lsb0), group),
        indent = INDENT,
        ruler = ruler,
    )
}

fn bin_info_perm(v: &BaseConv) -> Option<String> {
    v.to_perm(" ").map(|perm| {
        format!(
            "File Permission:\n  {}\n  -----  -----  -----\n  User   Group  Other\n",
            group_by(&perm, 6)
        )
    })
}

/// The binary view, grouped by nibbles or bytes as configured. Values wider
/// than `max_width` bits are split over two rows.
pub fn bin_info(v: &BaseConv, c: &Config, max_width: usize) -> String {
    bin_info_grouped(v, c, max_width, if c.group_by_bytes { 8 } else { 4 })
}

/// Octal literals that fit into nine bits are shown as unix file permissions
/// unless raw bits are requested. A `group` of 0 is taken as 1.
pub fn bin_info_grouped(v: &BaseConv, c: &Config, max_width: usize, group: usize) -> String {
    let group = group.max(1);

    if !c.raw_bits && v.base() == Base::Octal {
        if let Some(perm) = bin_info_perm(v) {
            return perm
        }
    }

    let mut bin = v.to_bin();
    if !c.raw_bits && c.register_view {
        bin = bin.replace('0', ".");
    }

    let width = v.width() as usize;
    trace!("bin view of {} bits, group {}, max width {}", width, group, max_width);

    let view = if width > max_width {
        bin_info_2rows(&bin, c, width, group)
    } else {
        bin_info_1row(&bin, c, width, group)
    };

    format!("Bin: {}", view)
}

pub fn hex_info(v: &BaseConv, c: &Config) -> String {
    let mut hex = format!("Hex: {}", group_by(&v.to_hex(), 4));
    if c.show_width {
        hex += &format!(" ({}-bit)", v.width());
    }
    hex
}

pub fn str_info(v: &BaseConv, c: &Config, max_width: usize) -> String {
    let mut s = format!("Str:  {}", group_by(&group_by(&v.to_ascii('.'), 1), 4));
    if c.show_ascii_code {
        let sep = if v.width() as usize > max_width { "\n     " } else { " " };
        s += &format!("{}({})", sep, v.to_ascii_code());
    }
    s
}

pub fn dec_info(v: &BaseConv, c: &Config) -> String {
    let mut dec = format!("Dec: {}", v.to_uint());
    if c.show_size {
        dec += &format!(" ({})", v.to_gmk());
    }
    if v.int() < 0 {
        dec += &format!(" / {}", v.to_int());
    }
    dec
}

/// All enabled views in display order: binary, hex, string, decimal.
pub fn render_all(v: &BaseConv, c: &Config) -> Vec<String> {
    let mut peek = Vec::new();

    if c.show_bin {
        peek.push(bin_info(v, c, c.bin_max_width()));
    }
    if c.show_hex {
        peek.push(hex_info(v, c));
    }
    if c.show_str {
        peek.push(str_info(v, c, STR_MAX_WIDTH));
    }
    if c.show_dec {
        peek.push(dec_info(v, c));
    }

    if peek.is_empty() {
        peek.push(ALL_VIEWS_DISABLED.to_string());
    } else if c.force_hex {
        peek.push(FORCE_HEX_MARKER.to_string());
    }

    peek
}
