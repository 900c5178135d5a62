//! File-backed store for executable images and core dumps

use super::Store;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// A store over a [`File`], positioned with seek before every transfer.
///
/// The file's own cursor is the only position state; callers always pass an
/// absolute offset, so interleaved reads at different offsets do not disturb
/// one another.
#[derive(Debug)]
pub struct FileStore {
    file: File,
}

impl FileStore {
    /// Wrap an already-open file
    pub fn new(file: File) -> Self {
        FileStore { file }
    }

    /// Open a file read-only, the usual mode for images and core dumps
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(FileStore {
            file: File::open(path)?,
        })
    }

    /// Open a file for reading and patching, the mode used by `w` commands
    pub fn open_rw(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(FileStore {
            file: OpenOptions::new().read(true).write(true).open(path)?,
        })
    }
}

impl Store for FileStore {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read(buf)
    }

    fn write_at(&mut self, offset: u64, buf: &[u8]) -> io::Result<usize> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write(buf)
    }
}
