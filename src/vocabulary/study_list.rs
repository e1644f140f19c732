use crate::{
    core::GundelikError,
    persistence::{
        self,
        KeyValueStore,
    },
};

pub const LEARNED_WORDS_KEY: &str = "learned_words";
pub const UNKNOWN_WORDS_KEY: &str = "unknown_words";

/// The user's learned/unknown word markings. The two lists are mutually
/// exclusive and keep insertion order, most recent last. Every mutation is
/// written back to the store before returning.
pub struct StudyList {
    store: Box<dyn KeyValueStore>,
    learned: Vec<String>,
    unknown: Vec<String>,
}

impl StudyList {
    pub fn load(store: Box<dyn KeyValueStore>) -> Result<Self, GundelikError> {
        let learned = persistence::load_or_default(store.as_ref(), LEARNED_WORDS_KEY)?;
        let unknown = persistence::load_or_default(store.as_ref(), UNKNOWN_WORDS_KEY)?;
        Ok(Self { store, learned, unknown })
    }

    pub fn mark_learned(&mut self, id: &str) -> Result<(), GundelikError> {
        self.learned.retain(|existing| existing != id);
        self.learned.push(id.to_string());
        self.unknown.retain(|existing| existing != id);
        self.save()
    }

    pub fn mark_unknown(&mut self, id: &str) -> Result<(), GundelikError> {
        self.unknown.retain(|existing| existing != id);
        self.unknown.push(id.to_string());
        self.learned.retain(|existing| existing != id);
        self.save()
    }

    pub fn unmark_learned(&mut self, id: &str) -> Result<bool, GundelikError> {
        if let Some(pos) = self.learned.iter().position(|existing| existing == id) {
            self.learned.remove(pos);
            self.save()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn unmark_unknown(&mut self, id: &str) -> Result<bool, GundelikError> {
        if let Some(pos) = self.unknown.iter().position(|existing| existing == id) {
            self.unknown.remove(pos);
            self.save()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn is_learned(&self, id: &str) -> bool {
        self.learned.iter().any(|existing| existing == id)
    }

    pub fn is_unknown(&self, id: &str) -> bool {
        self.unknown.iter().any(|existing| existing == id)
    }

    pub fn learned(&self) -> &[String] {
        &self.learned
    }

    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    fn save(&mut self) -> Result<(), GundelikError> {
        persistence::store(self.store.as_mut(), LEARNED_WORDS_KEY, &self.learned)?;
        persistence::store(self.store.as_mut(), UNKNOWN_WORDS_KEY, &self.unknown)
    }
}
