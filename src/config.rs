// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Process configuration for the optional debug hooks.

use std::path::PathBuf;

/// Halve every uploaded image before it reaches the driver.
pub const SHRINK_VAR: &str = "LIBGL_SHRINK";
/// Dump every uploaded image of a bound texture.
pub const TEXDUMP_VAR: &str = "LIBGL_TEXDUMP";
/// Directory for dumped images.  Defaults to the OS temp directory.
pub const TEXDUMP_DIR_VAR: &str = "LIBGL_TEXDUMP_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub shrink: bool,
    pub texture_dump: bool,
    pub dump_dir: PathBuf,
    /// Allocate non-power-of-two textures at their padded size and upload the
    /// image into the corner.  Only for drivers without NPOT support.
    pub pad_npot: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shrink: false,
            texture_dump: false,
            dump_dir: std::env::temp_dir(),
            pad_npot: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [Config::from_env], reading variables through `lookup`.
    ///
    /// Toggles are on only for the exact value `"1"`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = |name: &str| lookup(name).map(|e| e == "1").unwrap_or(false);
        let mut config = Self {
            shrink: enabled(SHRINK_VAR),
            texture_dump: enabled(TEXDUMP_VAR),
            ..Self::default()
        };
        if let Some(dir) = lookup(TEXDUMP_DIR_VAR) {
            config.dump_dir = PathBuf::from(dir);
        }
        config
    }
}
