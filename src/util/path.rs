use std::path::{Path, PathBuf};

/// Path of `path` relative to `root`, or `path` unchanged if no relative form exists
pub fn calculate_display_path(path: &Path, root: &Path) -> PathBuf {
    pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf())
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_display_path() {
        let path = PathBuf::from("/home/user/project/build/Main.class");
        let root = PathBuf::from("/home/user/project");

        let result = calculate_display_path(&path, &root);
        assert_eq!(result, PathBuf::from("build/Main.class"));
    }

    #[test]
    fn test_calculate_display_path_relative_root() {
        let path = PathBuf::from("./target/app.jar");
        let root = PathBuf::from(".");

        let result = calculate_display_path(&path, &root);
        assert_eq!(result, PathBuf::from("target/app.jar"));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde(Path::new("src")), PathBuf::from("src"));
        assert_eq!(expand_tilde(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
        // Only a whole leading component counts
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
    }

    #[test]
    fn test_expand_tilde_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/projects")), home.join("projects"));
    }
}
