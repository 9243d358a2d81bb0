//! Default clip directory.

use std::path::PathBuf;

/// Environment variable naming the clip directory.
pub const SOUND_DIR_ENV: &str = "SPELLWAV_SOUND_DIR";

/// Returns the clip directory to use when none is configured.
///
/// `SPELLWAV_SOUND_DIR` wins if set and non-empty; otherwise
/// `<data dir>/spellwav/en` (e.g. `~/.local/share/spellwav/en` on Linux).
pub fn default_sound_dir() -> Option<PathBuf> {
    from_env_value(std::env::var_os(SOUND_DIR_ENV))
        .or_else(|| dirs::data_dir().map(|dir| dir.join("spellwav").join("en")))
}

fn from_env_value(value: Option<std::ffi::OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
