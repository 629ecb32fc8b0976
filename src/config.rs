//! Block table and delimiter. The compiled-in [BLOCKS] and [DELIM] are used
//! unless a Lua config file overrides them.

use std::{
    borrow::Cow,
    io,
    path::{Path, PathBuf},
};

use mlua::{Lua, LuaSerdeExt};

pub use crate::block::Block;

mod delim;

pub use delim::Delim;

/// Sets delimiter between status commands. An empty string means no
/// delimiter
pub const DELIM: &str = "  ";

pub const DELIM_LEN: usize = DELIM.len();

pub const BLOCKS: [Block; 7] = [
    //         icon, command, interval, signal
    Block::new("", "$HOME/.config/dwmblocks/disk.sh", 30, 0),
    Block::new("", "$HOME/.config/dwmblocks/cpu.sh", 5, 0),
    Block::new("", "$HOME/.config/dwmblocks/ram.sh", 5, 0),
    Block::new("", "$HOME/.config/dwmblocks/wifi.sh", 5, 0),
    Block::new("", "$HOME/.config/dwmblocks/vol.sh", 5, 0),
    Block::new("", "$HOME/.config/dwmblocks/battery.sh", 10, 0),
    Block::new("", "$HOME/.config/dwmblocks/date.sh", 60, 0),
];

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Lua(#[from] mlua::Error),

    #[error("block {index}: {reason}")]
    Invalid { index: usize, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub blocks: Vec<Block>,
    pub delim: Delim,
}

impl Default for Config {
    fn default() -> Self {
        Self { blocks: BLOCKS.to_vec(), delim: Delim::new(DELIM) }
    }
}

/// The table returned by a config file, before defaults are filled in
#[derive(serde::Deserialize)]
struct ConfigFile {
    delim: Option<Delim>,
    blocks: Option<Vec<Block>>,
}

/// Largest signal offset that can be bound to a block, `SIGRTMAX - SIGRTMIN`
pub fn max_signal() -> u32 {
    (libc::SIGRTMAX() - libc::SIGRTMIN()) as u32
}

impl Config {
    /// Evaluate `src` as a Lua chunk returning the config table
    pub fn from_lua(src: &str) -> Result<Self, Error> {
        Self::from_lua_named(src, "config.lua")
    }

    fn from_lua_named(src: &str, name: &str) -> Result<Self, Error> {
        let lua = Lua::new();
        let globals = lua.globals();
        globals.set("HOME", std::env::var("HOME").ok())?;
        globals.set("MAX_SIGNAL", max_signal())?;

        let value: mlua::Value = lua.load(src).set_name(name).eval()?;
        let file: ConfigFile = lua.from_value(value)?;

        let default = Self::default();
        let config = Self {
            blocks: file.blocks.unwrap_or(default.blocks),
            delim: file.delim.unwrap_or(default.delim),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load the config file at `path`
    pub fn load(path: &Path) -> Result<Self, Error> {
        log::info!("loading config from {}", path.display());
        let src = std::fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_owned(), source })?;
        Self::from_lua_named(&src, &path.display().to_string())
    }

    /// Load the config file at [Config::default_path], falling back on the
    /// compiled-in defaults if it doesn't exist
    pub fn load_home() -> Result<Self, Error> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                log::info!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `$XDG_CONFIG_HOME/rwmblocks/config.lua`, or
    /// `$HOME/.config/rwmblocks/config.lua` if `XDG_CONFIG_HOME` is unset
    pub fn default_path() -> Option<PathBuf> {
        let base = match std::env::var_os("XDG_CONFIG_HOME") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => Path::new(&std::env::var_os("HOME")?).join(".config"),
        };
        Some(base.join("rwmblocks").join("config.lua"))
    }

    pub fn validate(&self) -> Result<(), Error> {
        let max = max_signal();
        for (index, block) in self.blocks.iter().enumerate() {
            block
                .validate(max)
                .map_err(|reason| Error::Invalid { index, reason })?;
        }
        Ok(())
    }

    /// Replace the delimiter, as with the `-d` flag
    pub fn set_delim(&mut self, delim: impl Into<Cow<'static, str>>) {
        self.delim = Delim::from(delim.into());
    }
}
