//! TextSearch Core - In-memory inverted index over text documents
//!
//! This library records, for every word, the documents and sentences it
//! occurs in along with a total occurrence count, and answers exact word
//! lookups and most-frequent-word queries.

pub mod error;
pub mod index;
pub mod tokenizer;

pub use error::{IndexError, Result};
pub use index::{DocumentHits, Index, IndexStats, Sentences, TopWords};
pub use tokenizer::{Sentence, Tokenizer};
