//! User-home shorthand expansion for file arguments.

use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Only the bare-home forms expand; `~user` and tildes elsewhere in the path
/// pass through untouched. If no home directory can be resolved the path is
/// returned as-is and the subsequent file read reports the failure.
pub(crate) fn expand_user(path: &Path) -> PathBuf {
    let Some(raw) = path.to_str() else {
        return path.to_path_buf();
    };
    if raw == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_leading_tilde_slash() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_user(Path::new("~/notes.txt")), home.join("notes.txt"));
    }

    #[test]
    fn expands_bare_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_user(Path::new("~")), home);
    }

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(
            expand_user(Path::new("/tmp/file.iso")),
            PathBuf::from("/tmp/file.iso")
        );
    }

    #[test]
    fn leaves_mid_path_tildes_alone() {
        assert_eq!(
            expand_user(Path::new("backup/~old.txt")),
            PathBuf::from("backup/~old.txt")
        );
    }
}
