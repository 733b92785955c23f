// SPDX-FileCopyrightText: © 2019 Robin Ole Heinemann <robin.ole.heinemann@gmail.com>
// SPDX-License-Identifier: AGPL-3.0-only

use itertools::Itertools;

// split `text` into chunks of `group` chars counted from the right end,
// so a short chunk ends up on the left
pub fn group_by(text: &str, group: usize) -> String {
    if group == 0 {
        return text.to_string()
    }

    let chars: Vec<char> = text.chars().collect();
    chars.rchunks(group).rev().map(|chunk| chunk.iter().collect::<String>()).join(" ")
}

// a `+` at every group boundary, bit 0 on the right for lsb0
pub fn bits_ruler(width: usize, group: usize, lsb0: bool) -> String {
    let group = group.max(1);
    let ruler = (0..width).map(|i| if i % group == 0 { '+' } else { '-' });

    if lsb0 {
        ruler.rev().collect()
    } else {
        ruler.collect()
    }
}

// bit numbers above each `+` of the matching ruler, starting at `start`
//
// a number takes two columns, so the column after it is skipped
pub fn bits_label(width: usize, group: usize, start: usize, lsb0: bool) -> String {
    let group = group.max(1);
    let mut cells = Vec::new();
    let mut i = 0;

    while i < width {
        if i % group == 0 {
            let bit = start + i;
            cells.push(if lsb0 { format!("{:>2}", bit) } else { format!("{:<2}", bit) });
            i += 2;
        } else {
            cells.push(" ".to_string());
            i += 1;
        }
    }

    if lsb0 {
        cells.reverse();
    }

    cells.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group() {
        assert_eq!(group_by("1234", 1), "1 2 3 4");
        assert_eq!(group_by("1234", 2), "12 34");
        assert_eq!(group_by("1234", 3), "1 234");
        assert_eq!(group_by("1234", 4), "1234");
        assert_eq!(group_by("1234", 5), "1234");
        assert_eq!(group_by("", 4), "");
        assert_eq!(group_by("r w x r w x r w x", 6), "r w x  r w x  r w x");
    }

    #[test]
    fn ruler_lsb0() {
        assert_eq!(bits_ruler(1, 4, true), "+");
        assert_eq!(bits_ruler(2, 4, true), "-+");
        assert_eq!(bits_ruler(3, 4, true), "--+");
        assert_eq!(bits_ruler(4, 4, true), "---+");
        assert_eq!(bits_ruler(5, 4, true), "+---+");
        assert_eq!(bits_ruler(5, 1, true), "+++++");
    }

    #[test]
    fn ruler_msb0() {
        assert_eq!(bits_ruler(1, 4, false), "+");
        assert_eq!(bits_ruler(2, 4, false), "+-");
        assert_eq!(bits_ruler(3, 4, false), "+--");
        assert_eq!(bits_ruler(4, 4, false), "+---");
        assert_eq!(bits_ruler(5, 4, false), "+---+");
        assert_eq!(bits_ruler(5, 1, false), "+++++");
    }

    #[test]
    fn zero_group_is_one() {
        assert_eq!(bits_ruler(3, 0, true), "+++");
        assert_eq!(bits_ruler(3, 0, false), "+++");
        assert_eq!(bits_label(4, 0, 0, true), bits_label(4, 1, 0, true));
        assert_eq!(bits_label(4, 0, 0, false), "0 2 ");
    }

    #[test]
    fn label() {
        assert_eq!(bits_label(2, 4, 0, true), " 0");
        assert_eq!(bits_label(3, 4, 0, true), "  0");
        assert_eq!(bits_label(4, 4, 0, true), "   0");
        assert_eq!(bits_label(8, 4, 0, true), "   4   0");
        assert_eq!(bits_label(16, 4, 16, true), "  28  24  20  16");

        assert_eq!(bits_label(8, 4, 0, false), "0   4   ");
        assert_eq!(bits_label(16, 4, 48, false), "48  52  56  60  ");
    }
}
