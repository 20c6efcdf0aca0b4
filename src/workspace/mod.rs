//! Directory-backed point-feature workspace.
//!
//! A workspace is a directory; each feature class within it is a `.wkt` file
//! holding one `POINT` per line. All feature I/O in the crate goes through
//! this module, so the storage substrate stays swappable behind one seam.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

pub mod cursor;
pub mod error;

#[doc(inline)]
pub use cursor::{InsertCursor, SearchCursor};
#[doc(inline)]
pub use error::WorkspaceError;

const CLASS_EXTENSION: &str = "wkt";

/// An open handle on a feature workspace.
///
/// Opening validates the directory exists; feature classes are resolved
/// lazily when a cursor is created.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Opens the workspace at `root`. A missing directory is a configuration
    /// error and fails immediately.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, WorkspaceError> {
        let root = root.as_ref().to_path_buf();

        if !root.is_dir() {
            return Err(WorkspaceError::MissingWorkspace(root));
        }

        Ok(Workspace { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn class_path(&self, class: &str) -> PathBuf {
        self.root.join(class).with_extension(CLASS_EXTENSION)
    }

    /// Whether a feature class of the given name exists in the workspace.
    pub fn exists(&self, class: &str) -> bool {
        self.class_path(class).is_file()
    }

    /// Creates an empty point feature class. The class must not already exist.
    pub fn create_feature_class(&self, class: &str) -> Result<(), WorkspaceError> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.class_path(class))?;

        Ok(())
    }

    /// Removes every row from an existing feature class.
    pub fn truncate(&self, class: &str) -> Result<(), WorkspaceError> {
        if !self.exists(class) {
            return Err(WorkspaceError::MissingFeatureClass(class.to_string()));
        }

        File::create(self.class_path(class))?;
        Ok(())
    }

    /// Opens a read cursor over the rows of a feature class, in storage order.
    pub fn search(&self, class: &str) -> Result<SearchCursor, WorkspaceError> {
        if !self.exists(class) {
            return Err(WorkspaceError::MissingFeatureClass(class.to_string()));
        }

        SearchCursor::open(&self.class_path(class), class)
    }

    /// Opens an append cursor on an existing feature class.
    pub fn insert(&self, class: &str) -> Result<InsertCursor, WorkspaceError> {
        if !self.exists(class) {
            return Err(WorkspaceError::MissingFeatureClass(class.to_string()));
        }

        InsertCursor::open(&self.class_path(class))
    }
}
