//! CSV ledger of saved search actions.
//!
//! Responsibilities:
//! - Start a fresh ledger (header only) for a disable or listonly run.
//! - Append one row per processed search.
//! - Read the ledger back and rewrite individual rows during an enable run.
//!
//! Does NOT handle:
//! - Concurrent writers. One run owns the file at a time.
//!
//! Invariants:
//! - The header is always `app,searchname,searchnamespace,cron_schedule,action,actiontime`.
//! - `update` rewrites only the matching rows; every other byte of the file is preserved.
//! - Rewrites land in a temp file in the ledger's directory that is synced and
//!   then renamed over the ledger, so a crash never leaves a half-written file.
//! - `reset` and every append are synced before returning, so each toggle
//!   that reached Splunk is on disk before the next one starts. An append
//!   interrupted by a crash can leave at most one partial trailing row.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ByteRecord, ReaderBuilder, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::searches::SearchRecord;

/// Column names, in on-disk order.
pub const HEADER: [&str; 6] = [
    "app",
    "searchname",
    "searchnamespace",
    "cron_schedule",
    "action",
    "actiontime",
];

/// `actiontime` format (local time, no zone).
pub const ACTIONTIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors raised by ledger I/O.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ledger CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("ledger {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("failed to replace ledger {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Action recorded against a saved search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerAction {
    #[serde(rename = "disable")]
    Disable,
    #[serde(rename = "enable")]
    Enable,
    #[serde(rename = "listonly")]
    ListOnly,
    #[serde(rename = "FAILED")]
    Failed,
}

impl LedgerAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Enable => "enable",
            Self::ListOnly => "listonly",
            Self::Failed => "FAILED",
        }
    }

    /// Rows an enable run should replay.
    pub fn needs_enable(self) -> bool {
        matches!(self, Self::Disable | Self::Failed)
    }
}

impl fmt::Display for LedgerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedgerAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disable" => Ok(Self::Disable),
            "enable" => Ok(Self::Enable),
            "listonly" => Ok(Self::ListOnly),
            "FAILED" => Ok(Self::Failed),
            other => Err(format!("unknown ledger action '{other}'")),
        }
    }
}

/// One ledger line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub app: String,
    pub searchname: String,
    pub searchnamespace: String,
    pub cron_schedule: String,
    pub action: LedgerAction,
    pub actiontime: String,
}

impl LedgerRow {
    /// Row for `record` stamped with the current local time.
    pub fn from_record(record: &SearchRecord, action: LedgerAction) -> Self {
        Self {
            app: record.app.clone(),
            searchname: record.title.clone(),
            searchnamespace: record.searchnamespace.clone(),
            cron_schedule: record.cron_schedule.clone(),
            action,
            actiontime: actiontime_now(),
        }
    }
}

/// Current local time in ledger format.
pub fn actiontime_now() -> String {
    chrono::Local::now().format(ACTIONTIME_FORMAT).to_string()
}

/// Handle to the ledger file at a fixed path.
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> LedgerError {
        LedgerError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_err(&self, source: csv::Error) -> LedgerError {
        LedgerError::Csv {
            path: self.path.clone(),
            source,
        }
    }

    /// Directory holding the ledger; `.` for a bare file name.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn writer<W: Write>(inner: W) -> csv::Writer<W> {
        WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(inner)
    }

    /// Create (or truncate) the ledger and write the header.
    ///
    /// Missing parent directories are created.
    pub fn reset(&self) -> Result<(), LedgerError> {
        fs::create_dir_all(self.dir()).map_err(|e| self.io_err(e))?;

        let file = fs::File::create(&self.path).map_err(|e| self.io_err(e))?;
        let mut wtr = Self::writer(file);
        wtr.write_record(HEADER).map_err(|e| self.csv_err(e))?;
        self.sync(wtr)?;

        debug!(path = %self.path.display(), "Ledger reset");
        Ok(())
    }

    /// Append a row for `record` with a fresh timestamp and return it.
    pub fn append(
        &self,
        record: &SearchRecord,
        action: LedgerAction,
    ) -> Result<LedgerRow, LedgerError> {
        let row = LedgerRow::from_record(record, action);
        self.append_row(&row)?;
        Ok(row)
    }

    /// Append an already-built row.
    pub fn append_row(&self, row: &LedgerRow) -> Result<(), LedgerError> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_err(e))?;

        let mut wtr = Self::writer(file);
        wtr.serialize(row).map_err(|e| self.csv_err(e))?;
        self.sync(wtr)
    }

    /// Flush the writer and sync its file to disk.
    fn sync(&self, wtr: csv::Writer<fs::File>) -> Result<(), LedgerError> {
        let file = wtr.into_inner().map_err(|e| self.io_err(e.into_error()))?;
        file.sync_all().map_err(|e| self.io_err(e))
    }

    /// Read every row, matching columns by header name.
    pub fn read_all(&self) -> Result<Vec<LedgerRow>, LedgerError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| self.csv_err(e))?;

        rdr.deserialize()
            .collect::<Result<Vec<LedgerRow>, _>>()
            .map_err(|e| self.csv_err(e))
    }

    /// Set `action` and a fresh `actiontime` on every row named `searchname`
    /// (restricted to `app` when given). Returns the number of rows changed.
    ///
    /// The file is rewritten even when nothing matched.
    pub fn update(
        &self,
        searchname: &str,
        app: Option<&str>,
        action: LedgerAction,
    ) -> Result<usize, LedgerError> {
        let data = fs::read(&self.path).map_err(|e| self.io_err(e))?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_slice());
        let headers = rdr.byte_headers().map_err(|e| self.csv_err(e))?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name.as_bytes())
                .ok_or_else(|| LedgerError::MissingColumn {
                    path: self.path.clone(),
                    column: name,
                })
        };
        let app_idx = column("app")?;
        let name_idx = column("searchname")?;
        let action_idx = column("action")?;
        let time_idx = column("actiontime")?;

        // Byte offset where each record starts, plus whether it matches
        let mut spans: Vec<(usize, Option<ByteRecord>)> = Vec::new();
        let mut record = ByteRecord::new();
        while rdr
            .read_byte_record(&mut record)
            .map_err(|e| self.csv_err(e))?
        {
            let start = record
                .position()
                .map(|p| p.byte() as usize)
                .unwrap_or(data.len());
            let matches = record.get(name_idx) == Some(searchname.as_bytes())
                && app.is_none_or(|app| record.get(app_idx) == Some(app.as_bytes()));
            spans.push((start, matches.then(|| record.clone())));
        }

        let actiontime = actiontime_now();
        let mut out: Vec<u8> = Vec::with_capacity(data.len() + 64);
        let header_end = spans.first().map_or(data.len(), |(start, _)| *start);
        out.extend_from_slice(&data[..header_end]);

        let mut changed = 0;
        for (i, (start, replacement)) in spans.iter().enumerate() {
            let end = spans.get(i + 1).map_or(data.len(), |(next, _)| *next);
            match replacement {
                None => out.extend_from_slice(&data[*start..end]),
                Some(old) => {
                    let fields: Vec<&[u8]> = old
                        .iter()
                        .enumerate()
                        .map(|(idx, field)| {
                            if idx == action_idx {
                                action.as_str().as_bytes()
                            } else if idx == time_idx {
                                actiontime.as_bytes()
                            } else {
                                field
                            }
                        })
                        .collect();

                    let mut wtr = Self::writer(&mut out);
                    wtr.write_record(&fields).map_err(|e| self.csv_err(e))?;
                    wtr.flush().map_err(|e| self.io_err(e))?;
                    changed += 1;
                }
            }
        }

        self.replace_contents(&out)?;
        debug!(searchname, ?app, %action, changed, "Ledger rows updated");
        Ok(changed)
    }

    /// Atomically replace the ledger with `contents`.
    fn replace_contents(&self, contents: &[u8]) -> Result<(), LedgerError> {
        let mut tmp = NamedTempFile::new_in(self.dir()).map_err(|e| self.io_err(e))?;
        tmp.write_all(contents).map_err(|e| self.io_err(e))?;
        tmp.flush().map_err(|e| self.io_err(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_err(e))?;
        tmp.persist(&self.path)
            .map_err(|source| LedgerError::Persist {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }
}
