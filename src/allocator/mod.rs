pub mod clock;


use std::collections::{
    BTreeMap,
    HashSet,
};

pub use clock::{
    Clock,
    FixedClock,
    SystemClock,
    DATE_KEY_FORMAT,
};
use rand::{
    seq::SliceRandom,
    RngCore,
};

use crate::{
    core::{
        DailyAllocation,
        GundelikError,
        VocabularyItem,
    },
    persistence::{
        self,
        FileStore,
        KeyValueStore,
    },
    vocabulary::VocabularyPool,
};

/// Words drawn per day.
pub const BATCH_SIZE: usize = 10;

pub const DAILY_WORDS_KEY: &str = "daily_words";
pub const USED_WORD_IDS_KEY: &str = "used_word_ids";

/// Draws a non-repeating batch of [`BATCH_SIZE`] words per calendar day.
///
/// Every id that ever appears in a day's batch goes into a persisted used
/// set and is never drawn again until [`reset`](Self::reset). A day whose
/// remaining pool cannot cover a full batch gets an empty allocation
/// instead of a partial one; that state holds until the pool grows or the
/// used set is reset.
///
/// All collaborators are injected: the word pool snapshot, the storage
/// handle, the date source, and the random source. [`new`](Self::new) wires
/// the defaults (file storage, UTC date, OS randomness).
pub struct DailyWordAllocator {
    pool: VocabularyPool,
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore>,
    allocations: BTreeMap<String, DailyAllocation>,
    used_ids: HashSet<String>,
    persisted: bool,
}

impl DailyWordAllocator {
    pub fn new(pool: VocabularyPool) -> Self {
        Self::with_parts(pool, Box::new(FileStore::new()), Box::new(SystemClock), Box::new(rand::rng()))
    }

    pub fn with_parts(
        pool: VocabularyPool,
        store: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
        rng: Box<dyn RngCore>,
    ) -> Self {
        let mut persisted = true;
        let allocations = match persistence::load_or_default(store.as_ref(), DAILY_WORDS_KEY) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Storage unavailable ({}). Daily words will not survive a restart.", e);
                persisted = false;
                BTreeMap::new()
            }
        };
        let used_ids = match persistence::load_or_default(store.as_ref(), USED_WORD_IDS_KEY) {
            Ok(data) => data,
            Err(e) => {
                if persisted {
                    eprintln!("Storage unavailable ({}). Daily words will not survive a restart.", e);
                }
                persisted = false;
                HashSet::new()
            }
        };

        Self { pool, store, clock, rng, allocations, used_ids, persisted }
    }

    /// Today's words, drawing them first if this is the first call of the
    /// day. Repeat calls on the same date return the stored batch unchanged
    /// without touching the random source or storage.
    pub fn todays_batch(&mut self) -> &[VocabularyItem] {
        self.generate_daily_words()
    }

    /// Creates today's allocation if none exists yet, otherwise a no-op
    /// returning the existing batch. An empty result means the pool is
    /// exhausted for a full batch.
    pub fn generate_daily_words(&mut self) -> &[VocabularyItem] {
        let today = self.clock.date_key();
        if !self.allocations.contains_key(&today) {
            self.generate_for(&today);
        }
        match self.allocations.get(&today) {
            Some(allocation) => &allocation.items,
            None => &[],
        }
    }

    fn generate_for(&mut self, date_key: &str) {
        let available: Vec<&VocabularyItem> =
            self.pool.items().iter().filter(|item| !self.used_ids.contains(&item.id)).collect();

        if available.len() < BATCH_SIZE {
            // Exhausted: record the empty day, leave the used set alone.
            self.allocations.insert(date_key.to_string(), DailyAllocation::empty(date_key));
            self.persist_allocations();
            return;
        }

        let mut drawn: Vec<VocabularyItem> = available.into_iter().cloned().collect();
        drawn.shuffle(self.rng.as_mut());
        drawn.truncate(BATCH_SIZE);

        for item in &drawn {
            self.used_ids.insert(item.id.clone());
        }
        self.allocations
            .insert(date_key.to_string(), DailyAllocation { date_key: date_key.to_string(), items: drawn });

        self.persist_allocations();
        self.persist_used_ids();
    }

    /// True iff a non-empty batch exists for today's date.
    pub fn has_allocation_for_today(&self) -> bool {
        let today = self.clock.date_key();
        self.allocations.get(&today).map(|allocation| !allocation.is_exhausted()).unwrap_or(false)
    }

    /// Whether enough unused words remain for a full future batch.
    pub fn can_generate_more(&self) -> bool {
        self.pool.len().saturating_sub(self.used_ids.len()) >= BATCH_SIZE
    }

    /// Administrative reset: forgets every allocation and the used set, and
    /// clears the stored records. The next call draws from the full pool.
    pub fn reset(&mut self) {
        self.allocations.clear();
        self.used_ids.clear();
        if let Err(e) = self.store.remove(DAILY_WORDS_KEY) {
            self.note_write_failure(e);
        }
        if let Err(e) = self.store.remove(USED_WORD_IDS_KEY) {
            self.note_write_failure(e);
        }
    }

    /// False once a storage write has failed and the allocator is running
    /// in memory only. Hosts should warn that progress may not survive a
    /// reload.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn allocation_for(&self, date_key: &str) -> Option<&DailyAllocation> {
        self.allocations.get(date_key)
    }

    pub fn used_count(&self) -> usize {
        self.used_ids.len()
    }

    pub fn pool(&self) -> &VocabularyPool {
        &self.pool
    }

    fn persist_allocations(&mut self) {
        if let Err(e) = persistence::store(self.store.as_mut(), DAILY_WORDS_KEY, &self.allocations) {
            self.note_write_failure(e);
        }
    }

    fn persist_used_ids(&mut self) {
        if let Err(e) = persistence::store(self.store.as_mut(), USED_WORD_IDS_KEY, &self.used_ids) {
            self.note_write_failure(e);
        }
    }

    fn note_write_failure(&mut self, e: GundelikError) {
        if self.persisted {
            eprintln!("Failed to save daily word state ({}). Continuing in memory only.", e);
        }
        self.persisted = false;
    }
}
