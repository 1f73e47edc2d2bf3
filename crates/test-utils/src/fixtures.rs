//! On-disk archive fixtures.
//!
//! The locator cares only about file names, so fixture slot files are
//! created empty; tests that also read data pair the returned paths with
//! an in-memory raster source.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use inca_common::{DayStamp, Product};

/// A temporary directory shaped like one day of the archive.
pub struct DataTree {
    dir: TempDir,
}

impl DataTree {
    /// Create an empty tree.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Root directory to hand to the locator.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Touch a correctly named slot file, optionally under a subdirectory.
    pub fn touch_slot(
        &self,
        subdir: Option<&str>,
        product: Product,
        day: &DayStamp,
        hour: usize,
        sub: usize,
    ) -> io::Result<PathBuf> {
        self.touch(subdir, &product.slot_filename(day, hour, sub))
    }

    /// Touch an arbitrarily named file, optionally under a subdirectory.
    pub fn touch(&self, subdir: Option<&str>, name: &str) -> io::Result<PathBuf> {
        let dir = match subdir {
            Some(sub) => {
                let dir = self.dir.path().join(sub);
                fs::create_dir_all(&dir)?;
                dir
            }
            None => self.dir.path().to_path_buf(),
        };
        let path = dir.join(name);
        File::create(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_slot_places_file() {
        let tree = DataTree::new().unwrap();
        let day = DayStamp::parse("2020-03-01").unwrap();

        let top = tree
            .touch_slot(None, Product::Temperature, &day, 0, 0)
            .unwrap();
        let nested = tree
            .touch_slot(Some("a/b"), Product::Rain, &day, 24, 5)
            .unwrap();

        assert!(top.is_file());
        assert!(nested.is_file());
        assert!(nested.starts_with(tree.root().join("a/b")));
        assert_eq!(
            top.file_name().unwrap().to_str().unwrap(),
            "202003010000_tem2_inca.h5"
        );
    }
}
