//! Flat-file persistence for a plant collection.
//!
//! Load and save are line-oriented and isolate per-line failures: a bad
//! line is recorded on the sink and skipped, never aborting the batch.
//! Only outright I/O failure on the file itself is different -- load
//! degrades to an empty collection with the failure recorded, save
//! surfaces a [`StoreError`].

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use crate::codec;
use crate::collection::PlantCollection;
use crate::observer::{Event, EventSink};

/// I/O failure on the file itself (not on individual lines).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a collection from `path`, one record per line.
///
/// Every line is parsed independently; parse failures are recorded as
/// [`Event::LineSkipped`] (1-based line numbers) and skipped. A missing
/// or unreadable file records [`Event::FileUnreadable`] and yields an
/// empty collection. Blank lines are ignored.
pub fn load_collection(path: &Path, today: NaiveDate, sink: &dyn EventSink) -> PlantCollection {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            sink.record(Event::FileUnreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            return PlantCollection::new();
        }
    };

    let reader = BufReader::new(file);
    let mut collection = PlantCollection::new();
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                sink.record(Event::LineSkipped {
                    line: line_no,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }
        match codec::parse_record(&line, today, sink) {
            Ok(record) => collection.add(record),
            Err(e) => sink.record(Event::LineSkipped {
                line: line_no,
                reason: e.to_string(),
            }),
        }
    }

    tracing::debug!(path = %path.display(), loaded = collection.len(), "loaded plant collection");
    collection
}

/// Write the collection to `path`, one formatted line per record in
/// current order, overwriting the target.
///
/// A failed single-line write is recorded as [`Event::RecordSkipped`] and
/// does not abort the remaining writes; failure to create or flush the
/// file surfaces a [`StoreError`].
pub fn save_collection(
    path: &Path,
    collection: &PlantCollection,
    sink: &dyn EventSink,
) -> Result<(), StoreError> {
    let file = File::create(path).map_err(|e| StoreError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    for record in collection.iter() {
        let line = codec::format_record(record);
        if let Err(e) = writeln!(writer, "{line}") {
            sink.record(Event::RecordSkipped {
                name: record.name().to_string(),
                reason: e.to_string(),
            });
        }
    }

    writer.flush().map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), saved = collection.len(), "saved plant collection");
    Ok(())
}
