pub mod loader;
pub mod schema;

pub use loader::{
    find_vocabulary_file, load_vocabulary, load_vocabulary_from_file, ConfigFormat,
    VOCABULARY_CANDIDATES,
};
pub use schema::{Category, Vocabulary, VocabularyError};
