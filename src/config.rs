// SPDX-FileCopyrightText: © 2019 Robin Ole Heinemann <robin.ole.heinemann@gmail.com>
// SPDX-License-Identifier: AGPL-3.0-only

use crate::serde_util::{bool_false, bool_true};
use failure::{Error, ResultExt};
use serde_derive::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Display settings, one snapshot per rendering.
///
/// The keys in config files are the camelCase field names (`showBin`,
/// `registerView`, `groupByBytes`, ...). Changing a setting means building a
/// new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// read every token as hex, for hex dumps
    #[serde(default = "bool_false")]
    pub force_hex: bool,
    /// number bits from the most significant end
    #[serde(default = "bool_false")]
    pub msb0: bool,
    /// show zero bits as `.`
    #[serde(default = "bool_true")]
    pub register_view: bool,
    #[serde(default = "bool_true")]
    pub show_ascii_code: bool,
    #[serde(default = "bool_true")]
    pub show_bin: bool,
    #[serde(default = "bool_true")]
    pub show_dec: bool,
    #[serde(default = "bool_true")]
    pub show_hex: bool,
    #[serde(default = "bool_true")]
    pub show_size: bool,
    #[serde(default = "bool_true")]
    pub show_str: bool,
    #[serde(default = "bool_true")]
    pub show_width: bool,
    /// only the grouped bits, no ruler, labels or permission view
    #[serde(default = "bool_false")]
    pub raw_bits: bool,
    /// keep 64 bit values on a single row
    #[serde(default = "bool_false")]
    pub single_row: bool,
    #[serde(default = "bool_false")]
    pub group_by_bytes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            force_hex: false,
            msb0: false,
            register_view: true,
            show_ascii_code: true,
            show_bin: true,
            show_dec: true,
            show_hex: true,
            show_size: true,
            show_str: true,
            show_width: true,
            raw_bits: false,
            single_row: false,
            group_by_bytes: false,
        }
    }
}

impl Config {
    pub fn from_yaml_str(contents: &str) -> Result<Config, Error> {
        if contents.trim().is_empty() {
            return Ok(Config::default())
        }

        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|e| format!("could not read config {}: {}", path.display(), e))?;

        Ok(Config::from_yaml_str(&contents)
            .with_context(|e| format!("could not parse config {}: {}", path.display(), e))?)
    }

    pub fn toggled_force_hex(&self) -> Config { Config { force_hex: !self.force_hex, ..self.clone() } }

    // widest value the binary view keeps on one row
    pub fn bin_max_width(&self) -> usize {
        if self.single_row {
            64
        } else {
            32
        }
    }
}
