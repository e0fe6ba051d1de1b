//! In-memory album storage

use super::album::{seed_albums, Album};

/// In-memory album store
///
/// Albums are kept in insertion order. Ids are not required to be unique:
/// lookups return the first match, while replace and delete touch every match.
#[derive(Debug, Clone, Default)]
pub struct AlbumStore {
    albums: Vec<Album>,
}

impl AlbumStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given albums, in order
    pub fn with_albums(albums: Vec<Album>) -> Self {
        AlbumStore { albums }
    }

    /// Create a store holding the three seed albums
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }

    /// All albums sorted by id (byte-wise, ascending)
    ///
    /// The stored order is left untouched.
    pub fn list(&self) -> Vec<Album> {
        let mut albums = self.albums.clone();
        albums.sort_by(|a, b| a.id.cmp(&b.id));
        albums
    }

    /// First album with exactly this id, in insertion order
    pub fn find_by_id(&self, id: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.id == id)
    }

    /// Append an album without checking for an existing id
    pub fn insert(&mut self, album: Album) -> &Album {
        self.albums.push(album);
        &self.albums[self.albums.len() - 1]
    }

    /// Replace every album with this id, forcing the replacement's id to `id`
    ///
    /// Returns the number of albums replaced. Zero is not an error.
    pub fn replace_by_id(&mut self, id: &str, replacement: Album) -> usize {
        let replacement = replacement.with_id(id);
        let mut replaced = 0;

        self.albums = std::mem::take(&mut self.albums)
            .into_iter()
            .map(|album| {
                if album.id == id {
                    replaced += 1;
                    replacement.clone()
                } else {
                    album
                }
            })
            .collect();

        replaced
    }

    /// Remove every album with this id and return what remains
    pub fn delete_by_id(&mut self, id: &str) -> &[Album] {
        self.albums.retain(|album| album.id != id);
        &self.albums
    }

    /// Number of albums, duplicates included
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}
