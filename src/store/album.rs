//! Album record

use serde::{Deserialize, Serialize};

/// A single album in the catalogue
///
/// Missing fields decode to their zero value, so a body without `id`
/// is still a valid album.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    /// Caller-supplied identifier, compared as an opaque string
    pub id: String,

    pub title: String,

    pub artist: String,

    /// Price, non-negative is not enforced
    pub price: f64,
}

impl Album {
    /// Create a new album
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Album {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Return this album with its id replaced
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Albums the store starts with
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new("3", "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
    ]
}
