//! Capability-based file access for the stylist command-line tools.
//!
//! Every helper opens an ambient directory with `cap-std` and then works
//! relative to it, so paths stay UTF-8 through `camino` end to end.
#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a file for reading.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole UTF-8 text file, such as an inventory snapshot or a
/// preference document.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_utf8_file(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Report whether `path` names an existing regular file.
///
/// Returns an error of kind [`io::ErrorKind::NotFound`] when the path, or
/// its parent directory, does not exist.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok(dir.metadata(name)?.is_file())
}

/// Create the directory that will hold `path`, including missing ancestors.
///
/// Database files are opened by path, so their directory must exist first.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (anchor, relative) = split_anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(anchor, ambient_authority())?.create_dir_all(relative)
}

/// Split `dir` into a directory `cap-std` can open ambiently and the
/// remainder relative to it.
///
/// Absolute paths anchor at their root (a drive or share prefix on
/// Windows); relative paths anchor at the working directory.
fn split_anchor(dir: &Utf8Path) -> io::Result<(&Utf8Path, &Utf8Path)> {
    if !dir.has_root() {
        return Ok((Utf8Path::new("."), dir));
    }
    let root = dir.ancestors().last().unwrap_or(dir);
    let relative = dir
        .strip_prefix(root)
        .map_err(|_| io::Error::other(format!("cannot strip root {root} from {dir}")))?;
    Ok((root, relative))
}
