use std::io::Read;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Where a list of integers is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
    /// A directory entry the walk could not read
    Unreadable { path: PathBuf, message: String },
}

impl Input {
    /// Name shown in headers and error messages
    pub fn label(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) | Input::Unreadable { path, .. } => path.display().to_string(),
        }
    }

    pub fn read_to_string(&self) -> std::io::Result<String> {
        match self {
            Input::Stdin => {
                let mut source = String::new();
                std::io::stdin().read_to_string(&mut source)?;
                Ok(source)
            }
            Input::File(path) => std::fs::read_to_string(path),
            Input::Unreadable { message, .. } => Err(std::io::Error::other(message.clone())),
        }
    }
}

/// Resolve command-line paths into the inputs to process, in order.
///
/// No paths, or a lone `-`, means stdin. Files are taken as given, whatever
/// their extension. Directories are walked recursively for files whose
/// extension is in `extensions`, in sorted order. A path that does not exist
/// is kept as a file so reading it reports the error, and so is every entry
/// the directory walk fails on.
pub fn collect_inputs(paths: &[PathBuf], extensions: &[String]) -> Vec<Input> {
    if paths.is_empty() {
        return vec![Input::Stdin];
    }

    let mut inputs = Vec::new();
    for path in paths {
        if path.as_os_str() == "-" {
            inputs.push(Input::Stdin);
        } else if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                            inputs.push(Input::File(entry.into_path()));
                        }
                    }
                    Err(e) => inputs.push(Input::Unreadable {
                        path: e.path().unwrap_or(path.as_path()).to_path_buf(),
                        message: e
                            .io_error()
                            .map_or_else(|| e.to_string(), |io| io.to_string()),
                    }),
                }
            }
        } else {
            inputs.push(Input::File(path.clone()));
        }
    }
    inputs
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts() -> Vec<String> {
        vec!["ints".to_string()]
    }

    #[test]
    fn no_paths_means_stdin() {
        assert_eq!(collect_inputs(&[], &exts()), vec![Input::Stdin]);
        assert_eq!(
            collect_inputs(&[PathBuf::from("-")], &exts()),
            vec![Input::Stdin]
        );
    }

    #[test]
    fn directories_are_walked_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir(root.join("nested")).unwrap();
        std::fs::write(root.join("b.ints"), "1").unwrap();
        std::fs::write(root.join("a.ints"), "1").unwrap();
        std::fs::write(root.join("notes.txt"), "1").unwrap();
        std::fs::write(root.join("nested/c.ints"), "1").unwrap();

        let inputs = collect_inputs(&[root.to_path_buf()], &exts());
        assert_eq!(
            inputs,
            vec![
                Input::File(root.join("a.ints")),
                Input::File(root.join("b.ints")),
                Input::File(root.join("nested/c.ints")),
            ]
        );
    }

    #[test]
    fn explicit_files_ignore_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("numbers.txt");
        std::fs::write(&file, "1").unwrap();

        assert_eq!(
            collect_inputs(&[file.clone()], &exts()),
            vec![Input::File(file)]
        );
    }

    #[test]
    fn unreadable_entry_fails_to_read() {
        let input = Input::Unreadable {
            path: PathBuf::from("data/locked"),
            message: "Permission denied (os error 13)".to_string(),
        };
        assert_eq!(input.label(), "data/locked");
        let err = input.read_to_string().unwrap_err();
        assert_eq!(err.to_string(), "Permission denied (os error 13)");
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_is_reported() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let locked = root.join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::write(root.join("a.ints"), "1").unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        let privileged = std::fs::read_dir(&locked).is_ok();
        let inputs = collect_inputs(&[root.to_path_buf()], &exts());
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        // Permission bits do not stop a privileged user.
        if privileged {
            return;
        }

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0], Input::File(root.join("a.ints")));
        assert!(matches!(&inputs[1], Input::Unreadable { path, .. } if path == &locked));
        assert!(inputs[1].read_to_string().is_err());
    }

    #[test]
    fn missing_path_is_kept() {
        let missing = PathBuf::from("does/not/exist.ints");
        let inputs = collect_inputs(&[missing.clone()], &exts());
        assert_eq!(inputs, vec![Input::File(missing)]);
        assert!(inputs[0].read_to_string().is_err());
    }
}
