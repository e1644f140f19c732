pub mod pool;
pub mod study_list;

pub use pool::VocabularyPool;
pub use study_list::StudyList;
