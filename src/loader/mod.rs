//! Best-effort reader for the facility and home feature classes.
//!
//! Read failures never abort the run here: the loader reports how far it got
//! through [`LoadStatus`] and hands back whatever was read before the
//! failure. The caller decides whether partial data is enough to proceed.

use geo::Point;
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::select::Facility;
use crate::workspace::{Workspace, WorkspaceError};

pub mod error;

#[doc(inline)]
pub use error::LoadError;

/// How to treat a home source that holds more than one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomePolicy {
    /// Keep the last record read. Tolerates the ambiguity silently apart
    /// from a warning.
    #[default]
    LastWins,
    /// Refuse to pick: more than one home record fails the load.
    Strict,
}

/// How far a load got before returning.
#[derive(Debug)]
pub enum LoadStatus {
    Complete,
    /// Something was read before the error struck.
    Partial(LoadError),
    /// Nothing at all was read.
    Failed(LoadError),
}

impl LoadStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, LoadStatus::Complete)
    }
}

/// Everything a load produced. `home` may be absent even on a `Complete`
/// load (an empty home source is tolerated); callers must check it before
/// ranking.
#[derive(Debug)]
pub struct LoadedData {
    pub facilities: Vec<Facility>,
    pub home: Option<Point>,
    pub status: LoadStatus,
}

/// Reads the facility collection and the home point from `workspace`.
///
/// Reads are sequential and order-preserving. The first error stops the
/// load but keeps everything read up to that point.
pub fn load(
    workspace: &Workspace,
    facility_class: &str,
    home_class: &str,
    policy: HomePolicy,
) -> LoadedData {
    let mut facilities = Vec::new();
    let mut error: Option<LoadError> = None;

    match workspace.search(facility_class) {
        Ok(cursor) => {
            for row in cursor {
                match row {
                    Ok(geometry) => facilities.push(Facility::from(geometry)),
                    Err(err) => {
                        warn!("Facility read aborted after {} rows: {err:?}", facilities.len());
                        error = Some(err.into());
                        break;
                    }
                }
            }
        }
        Err(err) => {
            warn!("Could not open facility class {facility_class}: {err:?}");
            error = Some(err.into());
        }
    }

    let mut home = None;
    if error.is_none() {
        match read_home(workspace, home_class, policy) {
            Ok(point) => home = point,
            Err(err) => {
                warn!("Could not read home class {home_class}: {err:?}");
                error = Some(err);
            }
        }
    }

    let status = match error {
        None => LoadStatus::Complete,
        Some(err) if facilities.is_empty() && home.is_none() => LoadStatus::Failed(err),
        Some(err) => LoadStatus::Partial(err),
    };

    LoadedData {
        facilities,
        home,
        status,
    }
}

fn read_home(
    workspace: &Workspace,
    home_class: &str,
    policy: HomePolicy,
) -> Result<Option<Point>, LoadError> {
    let rows = workspace
        .search(home_class)?
        .collect::<Result<Vec<_>, WorkspaceError>>()?;

    match policy {
        HomePolicy::LastWins => {
            if rows.len() > 1 {
                warn!(
                    "Home class {home_class} holds {} records; keeping the last",
                    rows.len()
                );
            }

            Ok(rows.last().copied())
        }
        HomePolicy::Strict => match rows.iter().at_most_one() {
            Ok(row) => Ok(row.copied()),
            Err(_) => Err(LoadError::AmbiguousHome { rows: rows.len() }),
        },
    }
}
