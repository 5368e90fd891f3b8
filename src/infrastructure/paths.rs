//! Paths inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, which points at the cwd of
//! the last focused terminal (usually the user's home directory).

use std::path::PathBuf;

/// Name of the trace log inside [`get_data_dir`].
pub const TRACE_FILE_NAME: &str = "otlp.json";

/// Returns the plugin data directory, `/host/.local/share/zellij/item-pager`.
///
/// # Examples
///
/// ```
/// use item_pager::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/item-pager"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("item-pager")
}

/// Where trace spans are exported.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Maps a `~`-prefixed path onto the sandbox `/host` mount.
///
/// # Examples
///
/// ```
/// use item_pager::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_user_paths_are_left_alone() {
        assert_eq!(expand_tilde("~alice/x"), "~alice/x");
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert!(trace_file_path().starts_with(get_data_dir()));
    }
}
