use std::{
    collections::HashSet,
    fs,
    path::Path,
};

use crate::core::{
    GundelikError,
    VocabularyItem,
};

/// Snapshot of the word universe the allocator draws from. Supplied
/// wholesale by the host at construction time and never mutated here.
#[derive(Debug, Clone, Default)]
pub struct VocabularyPool {
    items: Vec<VocabularyItem>,
}

impl VocabularyPool {
    /// Builds a pool from the host's word list, keeping the first entry for
    /// any duplicated id.
    pub fn from_items(items: Vec<VocabularyItem>) -> Self {
        let mut seen = HashSet::new();
        let items = items.into_iter().filter(|item| seen.insert(item.id.clone())).collect();
        Self { items }
    }

    /// Loads a pool from a JSON array of vocabulary items.
    pub fn from_json_file(path: &Path) -> Result<Self, GundelikError> {
        let content = fs::read_to_string(path).map_err(|e| {
            GundelikError::Custom(format!("Failed to read word file {}: {}", path.display(), e))
        })?;
        let items: Vec<VocabularyItem> = serde_json::from_str(&content)?;
        Ok(Self::from_items(items))
    }

    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&VocabularyItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_keep_first_entry() {
        let pool = VocabularyPool::from_items(vec![
            VocabularyItem::new("1", "Beautiful", "Gözəl"),
            VocabularyItem::new("2", "Important", "Vacib"),
            VocabularyItem::new("1", "Duplicate", "Dublikat"),
        ]);

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get("1").map(|item| item.source_text.as_str()), Some("Beautiful"));
    }
}
