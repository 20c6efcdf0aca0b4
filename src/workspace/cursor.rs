use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

use geo::Point;
use log::warn;
use wkt::{ToWkt, TryFromWkt};

use crate::workspace::WorkspaceError;

/// Sequential, order-preserving iterator over the geometries of a feature
/// class. Each row yields independently, so a malformed row surfaces as an
/// error item rather than aborting the cursor.
pub struct SearchCursor {
    lines: Lines<BufReader<File>>,
    class: String,
}

impl SearchCursor {
    pub(super) fn open(path: &Path, class: &str) -> Result<Self, WorkspaceError> {
        let file = File::open(path)?;

        Ok(SearchCursor {
            lines: BufReader::new(file).lines(),
            class: class.to_string(),
        })
    }

    fn parse_row(&self, row: &str) -> Result<Point, WorkspaceError> {
        Point::try_from_wkt_str(row).map_err(|err| WorkspaceError::MalformedGeometry {
            class: self.class.clone(),
            reason: format!("{err:?}"),
        })
    }
}

impl Iterator for SearchCursor {
    type Item = Result<Point, WorkspaceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = match self.lines.next()? {
                Ok(row) => row,
                Err(err) => return Some(Err(err.into())),
            };

            if row.trim().is_empty() {
                continue;
            }

            return Some(self.parse_row(&row));
        }
    }
}

/// Buffered append cursor on a feature class.
///
/// Rows are buffered until [`InsertCursor::close`] flushes them; dropping the
/// cursor also flushes, so rows inserted before a mid-write failure reach
/// storage on every exit path.
pub struct InsertCursor {
    writer: BufWriter<File>,
    rows: usize,
    closed: bool,
}

impl InsertCursor {
    pub(super) fn open(path: &Path) -> Result<Self, WorkspaceError> {
        let file = OpenOptions::new().append(true).open(path)?;

        Ok(InsertCursor {
            writer: BufWriter::new(file),
            rows: 0,
            closed: false,
        })
    }

    /// Appends a single point row.
    pub fn insert_row(&mut self, geometry: &Point) -> Result<(), WorkspaceError> {
        writeln!(self.writer, "{}", geometry.wkt_string())?;
        self.rows += 1;

        Ok(())
    }

    /// Flushes the cursor and returns the number of rows written through it.
    pub fn close(mut self) -> Result<usize, WorkspaceError> {
        self.writer.flush()?;
        self.closed = true;

        Ok(self.rows)
    }
}

impl Drop for InsertCursor {
    fn drop(&mut self) {
        if self.closed {
            return;
        }

        if let Err(err) = self.writer.flush() {
            warn!("Could not flush insert cursor. Encountered: {}", err);
        }
    }
}
