//! Persists a result set into an output feature class.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::select::ResultSet;
use crate::workspace::{Workspace, WorkspaceError};


/// What happens to rows already present in the output class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteMode {
    /// Truncate before writing. Prior contents are always lost, even across
    /// unrelated runs.
    #[default]
    Overwrite,
    /// Keep prior rows and append.
    Append,
}

/// Writes one geometry row per result entry into `class`, creating the class
/// when absent. Returns the number of rows written.
///
/// Unlike the loader there is no best-effort fallback: any failure here
/// propagates to the caller. Rows inserted before a failure still reach
/// storage, since the cursor flushes on drop.
pub fn write_results(
    workspace: &Workspace,
    class: &str,
    results: &ResultSet,
    mode: WriteMode,
) -> Result<usize, WorkspaceError> {
    if !workspace.exists(class) {
        debug!("Creating feature class {class}");
        workspace.create_feature_class(class)?;
    }

    if mode == WriteMode::Overwrite {
        workspace.truncate(class)?;
    }

    let mut cursor = workspace.insert(class)?;
    for ranked in results {
        cursor.insert_row(&ranked.geometry)?;
    }

    let written = cursor.close()?;
    info!("Saved {written} rows to {class}");

    Ok(written)
}
