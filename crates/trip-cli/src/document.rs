//! Itinerary documents as read from and written to disk.
//!
//! The trip API stores drafts as `{ "itinerary_draft": [...] }`; editors and
//! the AI import hand around the bare day array. Both are accepted and the
//! output keeps whichever shape came in.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use trip_core::Itinerary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Document {
    /// Persistence envelope used by the trip API.
    Draft {
        itinerary_draft: Itinerary,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Bare(Itinerary),
}

impl Document {
    pub const fn itinerary(&self) -> &Itinerary {
        match self {
            Self::Draft {
                itinerary_draft, ..
            } => itinerary_draft,
            Self::Bare(itinerary) => itinerary,
        }
    }

    /// Same envelope, new itinerary.
    #[must_use]
    pub fn with_itinerary(&self, itinerary: Itinerary) -> Self {
        match self {
            Self::Draft { extra, .. } => Self::Draft {
                itinerary_draft: itinerary,
                extra: extra.clone(),
            },
            Self::Bare(_) => Self::Bare(itinerary),
        }
    }

    /// Reads a document from `path`, or from stdin when `path` is `None`.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Self::read_from(std::io::BufReader::new(file))
                    .with_context(|| format!("failed to read itinerary from {}", path.display()))
            }
            None => Self::read_from(std::io::stdin().lock())
                .context("failed to read itinerary from stdin"),
        }
    }

    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("invalid itinerary document")
    }

    pub fn write<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut *writer, self)?;
        } else {
            serde_json::to_writer(&mut *writer, self)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
