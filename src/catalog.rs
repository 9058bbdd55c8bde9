//! Planet catalog: a flat, line-oriented text file of planet records.
//!
//! Each record is one line of seven whitespace-separated fields:
//!
//! ```text
//! <name> <orbitRadius> <angularSpeed> <radius> <r> <g> <b>
//! ```
//!
//! Lines starting with `#` or shorter than five characters are comments or
//! blanks. A line that doesn't parse as exactly seven valid fields is
//! skipped, never fatal.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use bevy::log::{info, warn};

use crate::types::Rgb;

/// Lines shorter than this are treated as blank.
const MIN_LINE_LEN: usize = 5;

/// Number of fields in a record line.
const FIELD_COUNT: usize = 7;

/// One planet as stored in the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetRecord {
    pub name: String,
    pub orbit_radius: f32,
    pub angular_speed: f32,
    pub radius: f32,
    pub color: Rgb,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog {0} contains no planets")]
    Empty(PathBuf),

    #[error("invalid planet record: {0}")]
    InvalidRecord(String),

    #[error("no planet at index {index} (catalog has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl PlanetRecord {
    /// Check the fields a record line must satisfy to round-trip.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.is_empty() {
            return Err(CatalogError::InvalidRecord("name is empty".into()));
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(CatalogError::InvalidRecord(format!(
                "name '{}' contains whitespace",
                self.name
            )));
        }
        if self.name.starts_with('#') {
            return Err(CatalogError::InvalidRecord(format!(
                "name '{}' starts with '#'",
                self.name
            )));
        }
        if !self.orbit_radius.is_finite() || self.orbit_radius < 0.0 {
            return Err(CatalogError::InvalidRecord(format!(
                "orbit radius {} must be finite and non-negative",
                self.orbit_radius
            )));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(CatalogError::InvalidRecord(format!(
                "radius {} must be finite and non-negative",
                self.radius
            )));
        }
        if !self.angular_speed.is_finite() {
            return Err(CatalogError::InvalidRecord(format!(
                "angular speed {} must be finite",
                self.angular_speed
            )));
        }
        Ok(())
    }

    /// Render as a catalog line (without trailing newline).
    pub fn to_line(&self) -> String {
        format!(
            "{} {:.3} {:.6} {:.3} {} {} {}",
            self.name,
            self.orbit_radius,
            self.angular_speed,
            self.radius,
            self.color.r(),
            self.color.g(),
            self.color.b()
        )
    }
}

/// Whether a line is a comment or blank rather than a record.
fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.len() < MIN_LINE_LEN
}

/// Parse one catalog line. `None` for comments, blanks and malformed lines.
pub fn parse_line(line: &str) -> Option<PlanetRecord> {
    let line = line.trim_end_matches(['\r', '\n']);
    if is_comment(line) {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    let record = PlanetRecord {
        name: fields[0].to_string(),
        orbit_radius: fields[1].parse().ok()?,
        angular_speed: fields[2].parse().ok()?,
        radius: fields[3].parse().ok()?,
        color: Rgb::new(
            fields[4].parse().ok()?,
            fields[5].parse().ok()?,
            fields[6].parse().ok()?,
        ),
    };
    record.validate().ok()?;
    Some(record)
}

/// Parse a whole catalog, skipping comments and malformed lines.
pub fn parse_catalog(text: &str) -> Vec<PlanetRecord> {
    let mut records = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some(record) => records.push(record),
            None if !is_comment(line) => {
                warn!("Skipping malformed planet record on line {}", line_no + 1);
            }
            None => {}
        }
    }
    records
}

/// Planet catalog backed by a text file.
#[derive(Clone, Debug)]
pub struct PlanetCatalog {
    path: PathBuf,
}

impl PlanetCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }


    /// Read all records, in file order.
    pub fn load(&self) -> Result<Vec<PlanetRecord>, CatalogError> {
        let text = fs::read_to_string(&self.path)?;
        let records = parse_catalog(&text);
        info!(
            "Loaded {} planets from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Read all records, failing if there are none.
    pub fn load_non_empty(&self) -> Result<Vec<PlanetRecord>, CatalogError> {
        let records = self.load()?;
        if records.is_empty() {
            return Err(CatalogError::Empty(self.path.clone()));
        }
        Ok(records)
    }

    /// Validate `record` and append it as a new line. Creates the file if needed.
    pub fn append(&self, record: &PlanetRecord) -> Result<(), CatalogError> {
        record.validate()?;

        let needs_newline = match fs::read(&self.path) {
            Ok(bytes) => !bytes.is_empty() && !bytes.ends_with(b"\n"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_newline {
            writeln!(file)?;
        }
        writeln!(file, "{}", record.to_line())?;

        info!("Appended planet '{}' to {}", record.name, self.path.display());
        Ok(())
    }

    /// Rewrite the catalog without the record at `index`.
    ///
    /// `index` counts records only; comment and blank lines are kept and the
    /// remaining records keep their relative order.
    pub fn remove(&self, index: usize) -> Result<PlanetRecord, CatalogError> {
        let text = fs::read_to_string(&self.path)?;

        let mut kept = Vec::new();
        let mut removed = None;
        let mut record_index = 0;
        for line in text.lines() {
            if let Some(record) = parse_line(line) {
                let current = record_index;
                record_index += 1;
                if current == index {
                    removed = Some(record);
                    continue;
                }
            }
            kept.push(line);
        }

        let Some(removed) = removed else {
            return Err(CatalogError::IndexOutOfRange {
                index,
                len: record_index,
            });
        };

        let mut out = kept.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        fs::write(&self.path, out)?;

        info!("Removed planet '{}' from {}", removed.name, self.path.display());
        Ok(removed)
    }
}
