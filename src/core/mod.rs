pub mod errors;
pub mod models;

pub use errors::GundelikError;
pub use models::{
    DailyAllocation,
    Pronunciation,
    VocabularyItem,
};
