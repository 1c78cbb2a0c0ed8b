use log::{debug, warn};
use platform_dirs::AppDirs;
use ron::de::from_reader;
use ron::ser::{to_string_pretty, PrettyConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::math::GroupingPolicy;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "defaults::color")]
    pub color: bool,
    #[serde(default = "defaults::clear_screen")]
    pub clear_screen: bool,
    #[serde(default = "defaults::pause_after_result")]
    pub pause_after_result: bool,
    #[serde(default = "defaults::grouping")]
    pub grouping: GroupingPolicy,
    /// 0 keeps every entry.
    #[serde(default = "defaults::max_history")]
    pub max_history: usize,
}

macro_rules! default_ {
    ($name:ident, $type:ident) => {
        pub fn $name() -> $type {
            Config::default().$name
        }
    };
}

mod defaults {
    use super::Config;
    use super::GroupingPolicy;
    default_!(color, bool);
    default_!(clear_screen, bool);
    default_!(pause_after_result, bool);
    default_!(grouping, GroupingPolicy);
    default_!(max_history, usize);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            pause_after_result: true,
            grouping: GroupingPolicy::Strict,
            max_history: 0,
        }
    }
}

impl Config {
    /// `<config dir>/fraccalc/fraccalc.cfg`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        let dirs = AppDirs::new(Some("fraccalc"), false)?;
        Some(dirs.config_dir.join("fraccalc.cfg"))
    }

    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("no config directory on this platform, using defaults");
                Self::default()
            }
        }
    }

    /// Reads the config at `path`. A missing file is created with the
    /// defaults; fields missing from an existing file are filled in and
    /// written back. An unreadable file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(_) => {
                debug!("creating default config at {}", path.display());
                let conf = Self::default();
                conf.save(path);
                return conf;
            }
        };
        match from_reader::<fs::File, Self>(file) {
            Ok(conf) => {
                // write back default values of any fields not present
                conf.save(path);
                conf
            }
            Err(e) => {
                warn!("could not parse {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) {
        let text = match to_string_pretty(self, PrettyConfig::default()) {
            Ok(text) => text,
            Err(e) => {
                warn!("could not serialize config: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(path, text) {
            warn!("could not write {}: {e}", path.display());
        }
    }
}

#[cfg(test)]
fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("fraccalc-config-test-{}", std::process::id()))
        .join(name)
}

#[test]
fn missing_file_writes_defaults() {
    let path = scratch_path("missing.cfg");
    let _ = fs::remove_file(&path);
    assert_eq!(Config::load_from(&path), Config::default());
    assert!(path.exists());
}

#[test]
fn partial_file_is_filled_in() {
    let path = scratch_path("partial.cfg");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "(color: false, grouping: Lenient)").unwrap();

    let conf = Config::load_from(&path);
    assert!(!conf.color);
    assert_eq!(conf.grouping, GroupingPolicy::Lenient);
    assert!(conf.clear_screen);

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("max_history"));
}

#[test]
fn garbage_file_yields_defaults() {
    let path = scratch_path("garbage.cfg");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "this is not ron").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}
