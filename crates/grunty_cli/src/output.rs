//! Rendering search results.
//!
//! [`SolutionWriter`] is a [`Reporter`] that streams each match to a writer
//! as soon as the search finds it.
//!
//! Text output is one line with the label followed by one `name\tcount` line
//! per food:
//!
//! ```text
//! noble
//! golden_egg	15
//! grunt_mints	0
//! ```
//!
//! JSON output is one object per line, foods in pantry order:
//!
//! ```text
//! {"label":"noble","food":{"golden_egg":15,"grunt_mints":0}}
//! ```

use core::fmt;
use std::io::{self, Write};

use grunty_search::{Inventory, Reporter};
use serde::{Serialize, Serializer};

/// Result rendering format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Label line plus tab-separated counts.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Consumption counts serialized as an ordered map.
struct Counts<'a>(&'a Inventory);

impl Serialize for Counts<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.consumption())
    }
}

#[derive(Serialize)]
struct Record<'a> {
    label: &'a str,
    food: Counts<'a>,
}

/// Streams matches to a writer.
///
/// The search itself cannot fail, so the first write error is stored and
/// every later match is dropped. [`finish`](Self::finish) surfaces it.
#[derive(Debug)]
pub struct SolutionWriter<W: Write> {
    out: W,
    format: OutputFormat,
    written: u64,
    error: Option<io::Error>,
}

impl<W: Write> SolutionWriter<W> {
    /// Creates a writer in the given format.
    #[must_use]
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            written: 0,
            error: None,
        }
    }

    /// Matches written so far.
    #[must_use]
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing, or a flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write(&mut self, label: &str, inventory: &Inventory) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "{label}")?;
                for (name, consumed) in inventory.consumption() {
                    writeln!(self.out, "{name}\t{consumed}")?;
                }
            }
            OutputFormat::Json => {
                let record = Record {
                    label,
                    food: Counts(inventory),
                };
                serde_json::to_writer(&mut self.out, &record)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Reporter for SolutionWriter<W> {
    fn report(&mut self, label: &str, inventory: &Inventory) {
        if self.error.is_some() {
            return;
        }
        match self.write(label, inventory) {
            Ok(()) => self.written += 1,
            Err(err) => {
                tracing::error!(error = %err, "failed to write result; dropping the rest");
                self.error = Some(err);
            }
        }
    }
}
