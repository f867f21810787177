//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! `RawArtwork` mirrors the upstream collection API item; `Artwork` is the
//! display record the table renders. The server normalizes raw items once
//! so the browser only ever sees display-ready strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Shown when an artwork has no recorded place of origin.
pub const UNKNOWN_ORIGIN: &str = "Unknown";
/// Shown when an artwork has no artist display line.
pub const UNKNOWN_ARTIST: &str = "Not Available";
/// Shown when an artwork carries no inscriptions.
pub const NO_INSCRIPTIONS: &str = "None";
/// Shown for a missing start or end year.
pub const UNKNOWN_DATE: &str = "N/A";

/// Total used when the upstream pagination block reports nothing usable.
pub const FALLBACK_TOTAL_RECORDS: u64 = 1000;

/// One artwork item as returned by the upstream collection API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArtwork {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

/// Display record for one table row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: String,
    pub date_end: String,
}

impl Artwork {
    /// Normalize an upstream item, substituting placeholders for missing fields.
    #[must_use]
    pub fn from_raw(raw: RawArtwork) -> Self {
        Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            place_of_origin: text_or(raw.place_of_origin, UNKNOWN_ORIGIN),
            artist_display: text_or(raw.artist_display, UNKNOWN_ARTIST),
            inscriptions: text_or(raw.inscriptions, NO_INSCRIPTIONS),
            date_start: year_or_placeholder(raw.date_start),
            date_end: year_or_placeholder(raw.date_end),
        }
    }
}

fn text_or(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => placeholder.to_owned(),
    }
}

// A zero year is treated as absent, matching how the collection API pads
// undated records.
fn year_or_placeholder(year: Option<i64>) -> String {
    match year {
        Some(y) if y != 0 => y.to_string(),
        _ => UNKNOWN_DATE.to_owned(),
    }
}

/// Replace an unusable total (absent or zero) with [`FALLBACK_TOTAL_RECORDS`].
#[must_use]
pub fn effective_total(total: Option<u64>) -> u64 {
    match total {
        Some(t) if t > 0 => t,
        _ => FALLBACK_TOTAL_RECORDS,
    }
}

/// One page of display records, as served by `GET /api/artworks`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworksPage {
    pub data: Vec<Artwork>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}
