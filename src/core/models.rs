use serde::{
    Deserialize,
    Serialize,
};

/// Audio references for the two reference accents shipped with the word data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub uk: String,
    pub us: String,
}

/// One vocabulary entry as supplied by the host application. Everything
/// beyond `id` is display metadata the allocator never inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub id: String,
    pub source_text: String,
    pub target_text: String,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub pronunciation: Option<Pronunciation>,
}

impl VocabularyItem {
    pub fn new(id: impl Into<String>, source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source_text: source_text.into(),
            target_text: target_text.into(),
            levels: Vec::new(),
            synonyms: Vec::new(),
            antonyms: Vec::new(),
            pronunciation: None,
        }
    }
}

/// The batch drawn for one calendar day. Immutable once created: repeat
/// queries for the same `date_key` are answered from this record. An empty
/// `items` marks the day the pool could no longer cover a full batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAllocation {
    pub date_key: String,
    pub items: Vec<VocabularyItem>,
}

impl DailyAllocation {
    pub fn empty(date_key: impl Into<String>) -> Self {
        Self { date_key: date_key.into(), items: Vec::new() }
    }

    pub fn is_exhausted(&self) -> bool {
        self.items.is_empty()
    }
}
