use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

use crate::ui::element::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidName { name: String },
    DuplicateName { name: String },
    GroupNameConflict { name: String },
    RowOutOfRange { row: u16, rows: u16 },
    ColumnOutOfRange { column: u16, columns: u16 },
    PositionOccupied { position: Position },
    FileNotFound { path: PathBuf },
    UnknownElement { name: String },
    TimerAlreadyRunning,
    InvalidInterval,
    TimerUnavailable { reason: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidName { name } => write!(f, "name {name:?} is not valid"),
            ErrorKind::DuplicateName { name } => {
                write!(f, "name {name:?} is already used by another element")
            }
            ErrorKind::GroupNameConflict { name } => {
                write!(f, "name {name:?} is already used by an element that is not a radio group")
            }
            ErrorKind::RowOutOfRange { row, rows } => {
                write!(f, "row {row} does not exist (rows: {rows})")
            }
            ErrorKind::ColumnOutOfRange { column, columns } => {
                write!(f, "column {column} does not exist (columns: {columns})")
            }
            ErrorKind::PositionOccupied { position } => {
                write!(f, "position {position} is already used by another element")
            }
            ErrorKind::FileNotFound { path } => {
                write!(f, "file {:?} does not exist", path.display().to_string())
            }
            ErrorKind::UnknownElement { name } => write!(f, "element {name:?} does not exist"),
            ErrorKind::TimerAlreadyRunning => write!(f, "a periodic listener is already running"),
            ErrorKind::InvalidInterval => write!(f, "timer interval must be greater than zero"),
            ErrorKind::TimerUnavailable { reason } => {
                write!(f, "periodic timer could not start: {reason}")
            }
        }
    }
}

/// Rejected window operation together with the call site that issued it.
#[derive(Debug, Clone)]
pub struct WindowError {
    kind: ErrorKind,
    location: &'static Location<'static>,
}

impl WindowError {
    /// Builds the error and reports it on the error channel (`tracing`).
    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        let location = Location::caller();
        tracing::error!(error = %kind, origin = %location, "window operation rejected");
        Self { kind, location }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// `getValue`/`setValue` on a name that resolves to nothing.
    pub fn is_lookup(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownElement { .. })
    }

    pub fn is_configuration(&self) -> bool {
        !self.is_lookup()
    }
}

impl PartialEq for WindowError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.kind, self.location)
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
#[path = "../../tests/unit/core/error.rs"]
mod tests;
