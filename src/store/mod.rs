//! In-memory storage module
//!
//! Holds the album catalogue. This module knows nothing about HTTP or
//! locking; callers decide how a store is shared.

mod album;
mod memory;

pub use album::{seed_albums, Album};
pub use memory::AlbumStore;
