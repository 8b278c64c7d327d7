use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),
}

/// Read a text file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files under `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Remove `dir` and everything in it, then recreate it empty
pub fn reset_directory(dir: &Path) -> Result<(), IoError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(IoError::InvalidDirectory(format!(
                "{} exists and is not a directory",
                dir.display()
            )));
        }
        fs::remove_dir_all(dir)?;
        log::debug!("Removed {}", dir.display());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Copy the tree under `src` into `dest`, returning the number of files copied
pub fn copy_directory(src: &Path, dest: &Path) -> Result<usize, IoError> {
    validate_dir(src)?;
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());

        if path.is_dir() {
            copied += copy_directory(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
            log::debug!("Copied {} to {}", path.display(), target.display());
            copied += 1;
        }
    }

    Ok(copied)
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDirectory(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}
