use std::path::PathBuf;

#[derive(Debug)]
pub enum WorkspaceError {
    MissingWorkspace(PathBuf),
    MissingFeatureClass(String),
    MalformedGeometry { class: String, reason: String },
    Io(std::io::Error),
}

impl From<std::io::Error> for WorkspaceError {
    fn from(value: std::io::Error) -> Self {
        WorkspaceError::Io(value)
    }
}
