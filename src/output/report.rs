use crate::cli::DisplayPathMode;
use crate::util::calculate_display_path;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes matched paths one per line
pub struct Reporter {
    root: PathBuf,
    mode: DisplayPathMode,
    /// Canonical root, resolved once for absolute output
    absolute_root: Option<PathBuf>,
}

impl Reporter {
    pub fn new(root: &Path, mode: DisplayPathMode) -> Self {
        let absolute_root = match mode {
            DisplayPathMode::Absolute => root.canonicalize().ok(),
            _ => None,
        };

        Self {
            root: root.to_path_buf(),
            mode,
            absolute_root,
        }
    }

    /// Path as it should be printed for a match found under the root
    pub fn display_path(&self, path: &Path) -> PathBuf {
        match self.mode {
            DisplayPathMode::Joined => path.to_path_buf(),
            DisplayPathMode::Relative => calculate_display_path(path, &self.root),
            DisplayPathMode::Absolute => {
                match (&self.absolute_root, path.strip_prefix(&self.root)) {
                    (Some(abs), Ok(rel)) => abs.join(rel),
                    _ => path.to_path_buf(),
                }
            }
        }
    }

    /// Write every path in order. Output is flushed before returning.
    pub fn write_all<W: Write>(&self, out: &mut W, paths: &[PathBuf]) -> io::Result<()> {
        for path in paths {
            writeln!(out, "{}", self.display_path(path).display())?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render(reporter: &Reporter, paths: &[PathBuf]) -> String {
        let mut buf = Vec::new();
        reporter.write_all(&mut buf, paths).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_joined_preserves_order() {
        let root = PathBuf::from("project");
        let reporter = Reporter::new(&root, DisplayPathMode::Joined);
        let paths = vec![
            root.join("z.jar"),
            root.join("a").join("B.class"),
            root.join(".DS_Store"),
        ];

        let expected = format!(
            "{}\n{}\n{}\n",
            paths[0].display(),
            paths[1].display(),
            paths[2].display()
        );
        assert_eq!(render(&reporter, &paths), expected);
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let reporter = Reporter::new(Path::new("."), DisplayPathMode::Joined);
        assert_eq!(render(&reporter, &[]), "");
    }

    #[test]
    fn test_relative_mode() {
        let root = PathBuf::from("/work/project");
        let reporter = Reporter::new(&root, DisplayPathMode::Relative);
        let path = root.join("build").join("Main.class");

        assert_eq!(
            reporter.display_path(&path),
            PathBuf::from("build").join("Main.class")
        );
    }

    #[test]
    fn test_absolute_mode() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let reporter = Reporter::new(root, DisplayPathMode::Absolute);
        let shown = reporter.display_path(&root.join("lib").join("app.jar"));

        assert!(shown.is_absolute());
        assert_eq!(
            shown,
            root.canonicalize().unwrap().join("lib").join("app.jar")
        );
    }
}
