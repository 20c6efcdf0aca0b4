use crate::loader::LoadError;
use crate::spatial::SpatialError;
use crate::workspace::WorkspaceError;

/// Converts errors from their error type (of the submodule) to that of
/// a nearby::Error variant.
///
/// ```rust,ignore
/// use nearby::workspace::WorkspaceError;
/// nearby::impl_err!(WorkspaceError, Workspace);
/// ```
#[macro_export]
macro_rules! impl_err {
    ($from:ty, $variant:ident) => {
        impl From<$from> for $crate::Error {
            fn from(value: $from) -> Self {
                $crate::Error::$variant(value)
            }
        }
    };
}

#[derive(Debug)]
pub enum Error {
    Spatial(SpatialError),
    Workspace(WorkspaceError),
    Load(LoadError),
}

impl_err!(SpatialError, Spatial);
impl_err!(WorkspaceError, Workspace);
impl_err!(LoadError, Load);
