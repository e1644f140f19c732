pub mod allocator;
pub mod core;
pub mod persistence;
pub mod progress;
pub mod vocabulary;

pub use allocator::{
    Clock,
    DailyWordAllocator,
    FixedClock,
    SystemClock,
    BATCH_SIZE,
};
pub use crate::core::{
    DailyAllocation,
    GundelikError,
    Pronunciation,
    VocabularyItem,
};
pub use persistence::{
    FileStore,
    KeyValueStore,
    MemoryStore,
};
pub use progress::ProgressTracker;
pub use vocabulary::{
    StudyList,
    VocabularyPool,
};
