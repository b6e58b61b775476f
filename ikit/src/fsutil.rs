//! # Filesystem Helpers
//!
//! Directory listing with suffix filters, recursive walks, path resolution
//! and file copying. Thin wrappers over `std::fs`, mostly there so every
//! caller filters suffixes and handles "not found" the same way.
//!
//! ## Suffix filters
//!
//! Suffixes match case-insensitively against the file name (`"txt"` matches
//! `notes.TXT`). There is no implicit dot: `"txt"` also matches `raw_txt`.
//! An empty suffix matches every file. Directories never match; listings
//! return files only.
//!
//! Results come back sorted by file name so output is stable across
//! platforms and filesystems.
//!
//! ## Symlinks
//!
//! Entries inside a directory are classified without following symlinks, so
//! a link to a directory shows up as a file and walks never loop through one.
//! The starting directory itself is followed.

use std::ffi::OsStr;
use std::fs::{self, DirEntry, File, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

/// Files directly inside `dir` whose names end with `suffix`.
///
/// Returned paths are `dir` joined with each file name.
///
/// # Errors
///
/// Any error reading `dir` or its entries.
pub fn list_files(dir: impl AsRef<Path>, suffix: &str) -> io::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let suffix = suffix.to_uppercase();

    let mut files = Vec::new();
    for entry in sorted_entries(dir)? {
        if entry.file_type()?.is_dir() {
            continue;
        }
        if has_suffix(&entry.file_name(), &suffix) {
            files.push(dir.join(entry.file_name()));
        }
    }

    debug!(dir = %dir.display(), matched = files.len(), "listed files");
    Ok(files)
}

/// Every file under `dir`, at any depth, whose name ends with `suffix`.
///
/// Depth-first, children in name order. If `dir` is itself a file it is
/// the only candidate. The first unreadable directory aborts the walk.
pub fn walk_files(dir: impl AsRef<Path>, suffix: &str) -> io::Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let suffix = suffix.to_uppercase();
    let mut files = Vec::new();

    if fs::metadata(dir)?.is_dir() {
        walk_into(dir, &suffix, &mut files)?;
    } else if dir.file_name().is_some_and(|name| has_suffix(name, &suffix)) {
        files.push(dir.to_path_buf());
    }

    debug!(dir = %dir.display(), matched = files.len(), "walked files");
    Ok(files)
}

fn walk_into(dir: &Path, suffix: &str, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in sorted_entries(dir)? {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            walk_into(&path, suffix, files)?;
        } else if has_suffix(&entry.file_name(), suffix) {
            files.push(path);
        }
    }
    Ok(())
}

/// Names of the directories directly inside `dir`.
pub fn list_folders(dir: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let mut folders = Vec::new();
    for entry in sorted_entries(dir.as_ref())? {
        if entry.file_type()?.is_dir() {
            folders.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(folders)
}

/// Whether `path` exists.
///
/// Only "not found" maps to `Ok(false)`. Anything else (permission denied,
/// a path component that is a regular file, ...) is returned as an error
/// rather than guessed at.
pub fn file_exists(path: impl AsRef<Path>) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Metadata for `path`, following symlinks.
pub fn file_info(path: impl AsRef<Path>) -> io::Result<Metadata> {
    fs::metadata(path)
}

/// `name` if it is already absolute, otherwise `base_dir/name`.
pub fn resolve_path(base_dir: impl AsRef<Path>, name: impl AsRef<Path>) -> PathBuf {
    let name = name.as_ref();
    if name.is_absolute() {
        return name.to_path_buf();
    }
    base_dir.as_ref().join(name)
}

/// Directory containing the running executable, symlinks resolved.
///
/// Asks the OS for the executable path first and falls back to the
/// directory of `argv[0]`, made absolute against the working directory.
/// If symlink resolution fails the unresolved directory is returned.
pub fn executable_directory() -> PathBuf {
    let folder = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(argv0_directory);

    match fs::canonicalize(&folder) {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!(dir = %folder.display(), error = %e, "could not resolve executable directory");
            folder
        }
    }
}

fn argv0_directory() -> PathBuf {
    let argv0 = std::env::args_os().next().map(PathBuf::from).unwrap_or_default();
    let dir = argv0.parent().map(Path::to_path_buf).unwrap_or_default();
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(_) => dir,
    }
}

/// Copy the contents of `src` into `dst`, returning the number of bytes
/// copied. `dst` is created if missing and truncated if present.
///
/// Note the argument order: destination first.
pub fn copy_file(dst: impl AsRef<Path>, src: impl AsRef<Path>) -> io::Result<u64> {
    let (dst, src) = (dst.as_ref(), src.as_ref());

    let mut reader = File::open(src)?;
    let mut writer = File::create(dst)?;
    let written = io::copy(&mut reader, &mut writer)?;

    info!(src = %src.display(), dst = %dst.display(), bytes = written, "copied file");
    Ok(written)
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(DirEntry::file_name);
    Ok(entries)
}

/// `suffix` must already be upper-cased.
fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    suffix.is_empty() || name.to_string_lossy().to_uppercase().ends_with(suffix)
}
