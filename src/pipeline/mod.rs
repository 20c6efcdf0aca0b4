//! Four-stage orchestration: setup, load, select, write.
//!
//! Each stage takes and returns values explicitly; no state outlives the
//! call to [`run`].

use std::path::PathBuf;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::loader::{self, HomePolicy, LoadError, LoadStatus};
use crate::select::{select_closest, Selection};
use crate::spatial::SpatialReference;
use crate::workspace::Workspace;
use crate::writer::{self, WriteMode};


pub const DEFAULT_COUNT: usize = 5;

const DEFAULT_FACILITY_CLASS: &str = "OSM_Medical_Facilities_AS_Cl1";
const DEFAULT_HOME_CLASS: &str = "MyHome";
const DEFAULT_OUTPUT_CLASS: &str = "Results";

/// A full run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workspace_path: PathBuf,
    pub coordinate_system: String,
    pub facility_class: String,
    pub home_class: String,
    pub output_class: String,
    /// How many facilities to keep.
    pub count: usize,
    pub home_policy: HomePolicy,
    pub write_mode: WriteMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workspace_path: PathBuf::from("./workshop.gdb"),
            coordinate_system: "WGS 1984".to_string(),
            facility_class: DEFAULT_FACILITY_CLASS.to_string(),
            home_class: DEFAULT_HOME_CLASS.to_string(),
            output_class: DEFAULT_OUTPUT_CLASS.to_string(),
            count: DEFAULT_COUNT,
            home_policy: HomePolicy::default(),
            write_mode: WriteMode::default(),
        }
    }
}

impl Config {
    /// Builds a configuration from the process environment, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(path) = std::env::var("NEARBY_WORKSPACE") {
            config.workspace_path = PathBuf::from(path);
        }

        if let Ok(crs) = std::env::var("NEARBY_CRS") {
            config.coordinate_system = crs;
        }

        if let Ok(count) = std::env::var("NEARBY_COUNT") {
            match count.parse() {
                Ok(count) => config.count = count,
                Err(_) => warn!("Ignoring unparseable NEARBY_COUNT: {count}"),
            }
        }

        config
    }
}

/// How a run ended, short of a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The closest facilities were persisted.
    Written(usize),
    /// Fewer facilities exist than were requested; nothing was written.
    NotAvailable { requested: usize, available: usize },
    /// No home point was loaded; ranking never ran.
    NoHome,
}

/// Runs the pipeline end to end.
///
/// Configuration errors (bad workspace path, unknown spatial reference) and
/// write errors propagate; load errors downgrade the run to partial data,
/// reported through the returned [`Outcome`].
pub fn run(config: &Config) -> Result<Outcome, Error> {
    let sref = SpatialReference::resolve(&config.coordinate_system)?;
    let workspace = Workspace::open(&config.workspace_path)?;
    info!(
        "Environment is set up: {} ({sref:?})",
        workspace.root().display()
    );

    let data = loader::load(
        &workspace,
        &config.facility_class,
        &config.home_class,
        config.home_policy,
    );

    match data.status {
        LoadStatus::Complete => info!("Data reading is complete"),
        // An ambiguous home under the strict policy is a policy violation,
        // not recoverable partial data.
        LoadStatus::Partial(err @ LoadError::AmbiguousHome { .. })
        | LoadStatus::Failed(err @ LoadError::AmbiguousHome { .. }) => return Err(err.into()),
        LoadStatus::Partial(err) => {
            warn!("Data reading was cut short, continuing with partial data: {err:?}")
        }
        LoadStatus::Failed(err) => warn!("Data reading produced nothing: {err:?}"),
    }

    let Some(home) = data.home else {
        warn!("No home point was loaded; nothing to rank");
        return Ok(Outcome::NoHome);
    };

    match select_closest(&data.facilities, home, config.count, sref) {
        Selection::NotAvailable {
            requested,
            available,
        } => {
            info!("Requested {requested} facilities but only {available} exist; skipping write");
            Ok(Outcome::NotAvailable {
                requested,
                available,
            })
        }
        Selection::Closest(results) => {
            info!("Closest facilities found");

            let written = writer::write_results(
                &workspace,
                &config.output_class,
                &results,
                config.write_mode,
            )?;

            Ok(Outcome::Written(written))
        }
    }
}
