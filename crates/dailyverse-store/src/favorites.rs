//! Saved poems, unique by id, in the order they were saved

use crate::blob::{load_blob, save_blob};
use crate::kv::KeyValueStore;
use dailyverse_core::Poem;
use std::sync::Arc;
use tracing::{debug, warn};

pub const FAVORITES_KEY: &str = "favorite_poems";

pub struct FavoritesStore {
    kv: Arc<dyn KeyValueStore>,
    poems: Vec<Poem>,
}

impl FavoritesStore {
    pub fn open(kv: Arc<dyn KeyValueStore>) -> Self {
        let mut poems: Vec<Poem> = load_blob(kv.as_ref(), FAVORITES_KEY);

        // A blob written by an older build may hold duplicates; keep the first
        let mut seen = std::collections::HashSet::new();
        poems.retain(|p| seen.insert(p.id.clone()));

        Self { kv, poems }
    }

    /// Add if absent, remove if present. Returns whether the poem is now a favorite.
    pub fn toggle(&mut self, poem: &Poem) -> bool {
        if self.remove(&poem.id) {
            false
        } else {
            self.add(poem.clone())
        }
    }

    /// Returns false if a poem with the same id is already saved
    pub fn add(&mut self, poem: Poem) -> bool {
        if self.is_favorite(&poem.id) {
            return false;
        }
        debug!("Adding favorite {}", poem.id);
        self.poems.push(poem);
        self.persist();
        true
    }

    pub fn remove(&mut self, poem_id: &str) -> bool {
        let before = self.poems.len();
        self.poems.retain(|p| p.id != poem_id);
        let removed = self.poems.len() != before;
        if removed {
            debug!("Removed favorite {}", poem_id);
            self.persist();
        }
        removed
    }

    pub fn is_favorite(&self, poem_id: &str) -> bool {
        self.poems.iter().any(|p| p.id == poem_id)
    }

    pub fn list(&self) -> &[Poem] {
        &self.poems
    }

    pub fn len(&self) -> usize {
        self.poems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    pub fn clear(&mut self) {
        self.poems.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = save_blob(self.kv.as_ref(), FAVORITES_KEY, &self.poems) {
            warn!("Failed to persist favorites: {}", e);
        }
    }
}
