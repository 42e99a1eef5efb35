//! Filesystem access for the resolver
//!
//! The resolver only needs to know what a path is, where it really points,
//! and what it contains. Keeping that behind a trait lets tests inject
//! failures the real filesystem cannot easily produce.

use std::io;
use std::path::{Path, PathBuf};

/// What a path refers to at the moment it is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Missing,
    Directory,
    File,
    /// Sockets, devices, FIFOs
    Other,
}

pub trait Filesystem: Send + Sync + 'static {
    /// Classifies `path`, following symlinks.
    fn kind(&self, path: &Path) -> EntryKind;

    /// Absolute path with every symlink and `..` resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Reads the whole file into memory.
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The local disk, via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn kind(&self, path: &Path) -> EntryKind {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Other,
            Err(_) => EntryKind::Missing,
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
