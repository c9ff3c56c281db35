//! Sandboxed workspace
//!
//! Every path a command touches is resolved against the tracked current
//! directory and must stay inside the workspace root. Paths are normalized
//! lexically so targets that do not exist yet can still be checked.

use std::fs::{self, OpenOptions};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

/// Errors raised by workspace operations
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    /// Resolved path escapes the workspace root
    #[error("Path {} is outside the workspace.", .0.display())]
    OutsideWorkspace(PathBuf),

    /// A required argument was not supplied
    #[error("missing operand for '{0}'")]
    MissingOperand(&'static str),

    /// Underlying filesystem failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias for workspace operations
pub type WorkspaceResult<T> = std::result::Result<T, WorkspaceError>;

/// A directory tree commands are confined to
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Canonical root
    root: PathBuf,
    /// Current directory, always inside `root`
    cwd: PathBuf,
}

impl Workspace {
    /// Open (creating if needed) the workspace at `root`
    pub fn open(root: impl AsRef<Path>) -> WorkspaceResult<Self> {
        fs::create_dir_all(root.as_ref())?;
        let root = root.as_ref().canonicalize()?;
        Ok(Self {
            cwd: root.clone(),
            root,
        })
    }

    /// Canonical workspace root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current directory
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve `path` against the current directory, rejecting escapes
    pub fn resolve(&self, path: &str) -> WorkspaceResult<PathBuf> {
        let resolved = self.resolve_lexically(path);
        if resolved.starts_with(&self.root) {
            Ok(resolved)
        } else {
            Err(WorkspaceError::OutsideWorkspace(resolved))
        }
    }

    fn resolve_lexically(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        let joined = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.cwd.join(candidate)
        };
        normalize(&joined)
    }

    /// Path relative to the root, `.` for the root itself
    pub fn display(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => rel.display().to_string(),
            Err(_) => path.display().to_string(),
        }
    }

    /// `cd`: paths outside the workspace clamp to the root
    pub fn change_dir(&mut self, path: &str) -> String {
        let mut target = self.resolve_lexically(path);
        if !target.starts_with(&self.root) {
            target = self.root.clone();
        }
        if !target.is_dir() {
            return format!("{} is not a directory", path);
        }
        self.cwd = target;
        format!("Current directory: {}", self.display(&self.cwd))
    }

    /// `ls`: sorted entry names, directories suffixed with `/`
    pub fn list_dir(&self, path: &str) -> WorkspaceResult<String> {
        let dir = self.resolve(path)?;
        if !dir.is_dir() {
            return Ok(format!("{} is not a directory", self.display(&dir)));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let mut name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type()?.is_dir() {
                name.push('/');
            }
            names.push(name);
        }
        names.sort();
        Ok(names.join("\n"))
    }

    /// `pwd`
    pub fn print_pwd(&self) -> String {
        self.display(&self.cwd)
    }

    /// `mkdir`: creates parents as needed
    pub fn make_dir(&self, path: &str) -> WorkspaceResult<String> {
        let dir = self.resolve(path)?;
        fs::create_dir_all(&dir)?;
        Ok(format!("Created {}", self.display(&dir)))
    }

    /// `rm`: files or whole directory trees, never the root
    pub fn remove_path(&self, path: &str) -> WorkspaceResult<String> {
        let target = self.resolve(path)?;
        if target == self.root {
            return Ok("Refusing to remove workspace root".to_string());
        }
        if target.is_dir() {
            fs::remove_dir_all(&target)?;
            Ok(format!("Removed directory {}", self.display(&target)))
        } else if target.exists() {
            fs::remove_file(&target)?;
            Ok(format!("Removed file {}", self.display(&target)))
        } else {
            Ok("No such file or directory".to_string())
        }
    }

    /// `cat`
    pub fn read_file(&self, path: &str) -> WorkspaceResult<String> {
        let file = self.resolve(path)?;
        if !file.exists() || file.is_dir() {
            return Ok("File not found or is a directory".to_string());
        }
        Ok(fs::read_to_string(&file)?)
    }

    /// `touch`: creates parents and an empty file if missing
    pub fn touch_file(&self, path: &str) -> WorkspaceResult<String> {
        let file = self.resolve(path)?;
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(&file)?;
        Ok(format!("Touched {}", self.display(&file)))
    }

    /// `mv`: an existing directory destination receives the source
    pub fn move_path(&self, src: &str, dst: &str) -> WorkspaceResult<String> {
        let from = self.resolve(src)?;
        let to = self.resolve(dst)?;
        let target = into_directory(&from, &to);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::rename(&from, &target)?;
        Ok(format!("Moved {} -> {}", self.display(&from), self.display(&to)))
    }

    /// `cp`: directories are copied recursively, and an existing directory
    /// destination receives the source
    pub fn copy_path(&self, src: &str, dst: &str) -> WorkspaceResult<String> {
        let from = self.resolve(src)?;
        let to = self.resolve(dst)?;
        let target = into_directory(&from, &to);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        if from.is_dir() {
            copy_dir_all(&from, &target)?;
        } else {
            fs::copy(&from, &target)?;
        }
        Ok(format!("Copied {} -> {}", self.display(&from), self.display(&to)))
    }

    /// `run`: spawn a subprocess in the current directory
    ///
    /// Returns trimmed stdout followed by trimmed stderr. Spawn failures
    /// and timeouts are reported in the output text.
    pub async fn run_subprocess(&self, command_line: &str, limit: Duration) -> String {
        let Some(argv) = shlex::split(command_line) else {
            return "Error running command: No closing quotation".to_string();
        };
        let Some((program, args)) = argv.split_first() else {
            return "Error running command: no command given".to_string();
        };

        let child = Command::new(program)
            .args(args)
            .current_dir(&self.cwd)
            .kill_on_drop(true)
            .output();

        match timeout(limit, child).await {
            Ok(Ok(output)) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                let mut text = stdout.trim().to_string();
                let err = stderr.trim();
                if !err.is_empty() {
                    text.push('\n');
                    text.push_str(err);
                }
                text
            }
            Ok(Err(e)) => format!("Error running command: {}", e),
            Err(_) => format!("Error running command: timed out after {:?}", limit),
        }
    }
}

/// Where `from` lands when written to `to`
fn into_directory(from: &Path, to: &Path) -> PathBuf {
    match from.file_name() {
        Some(name) if to.is_dir() => to.join(name),
        _ => to.to_path_buf(),
    }
}

/// Collapse `.` and `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn copy_dir_all(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_all(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }
    Ok(())
}
