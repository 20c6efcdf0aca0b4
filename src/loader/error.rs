use crate::workspace::WorkspaceError;

#[derive(Debug)]
pub enum LoadError {
    Workspace(WorkspaceError),
    AmbiguousHome { rows: usize },
}

impl From<WorkspaceError> for LoadError {
    fn from(value: WorkspaceError) -> Self {
        LoadError::Workspace(value)
    }
}
