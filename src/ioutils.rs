use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating missing parent directories.
/// An existing file is truncated and overwritten.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_file_creates_parents_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a/b/file.txt");

        write_file("first", &target).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "first");

        write_file("second", &target).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
    }
}
