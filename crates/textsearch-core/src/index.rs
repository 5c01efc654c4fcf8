//! Inverted index from words to the documents and sentences containing them

use ahash::{AHashMap, AHashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::error::{IndexError, Result};
use crate::tokenizer::Tokenizer;

/// Unique sentences a word was found in, for one document
pub type Sentences = AHashSet<String>;

/// Document name -> sentences containing a word
pub type DocumentHits = AHashMap<String, Sentences>;

/// Word -> its document hits, as returned by [`Index::top_words`]
pub type TopWords = AHashMap<String, DocumentHits>;

/// In-memory inverted index
///
/// Append-only: ingesting never removes anything, and re-ingesting a
/// document under the same name adds its occurrences again.
#[derive(Debug, Clone)]
pub struct Index {
    tokenizer: Tokenizer,

    // Core index structures
    postings: AHashMap<String, DocumentHits>, // word -> {document: sentences}
    counts: AHashMap<String, usize>,          // word -> total occurrences

    // Statistics
    documents: AHashSet<String>,
    total_occurrences: u64,
}

impl Index {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::with_tokenizer(Tokenizer::default())
    }

    /// Create index with a custom tokenizer
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            postings: AHashMap::new(),
            counts: AHashMap::new(),
            documents: AHashSet::new(),
            total_occurrences: 0,
        }
    }

    /// Add a document given as a single text blob
    pub fn ingest(&mut self, document: &str, text: &str) {
        self.ingest_lines(document, text.lines());
    }

    /// Add a document given as a sequence of lines
    pub fn ingest_lines<I, S>(&mut self, document: &str, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sentences = self.tokenizer.tokenize(lines);
        let mut occurrences = 0usize;

        for sentence in &sentences {
            for word in &sentence.words {
                self.postings
                    .entry(word.clone())
                    .or_default()
                    .entry(document.to_owned())
                    .or_default()
                    .insert(sentence.text.clone());
                *self.counts.entry(word.clone()).or_insert(0) += 1;
                occurrences += 1;
            }
        }

        self.documents.insert(document.to_owned());
        self.total_occurrences += occurrences as u64;

        debug!(
            document,
            sentences = sentences.len(),
            words = occurrences,
            "ingested document"
        );
    }

    /// Add a document read line by line from `reader`
    ///
    /// All lines are read before anything is indexed, so a read failure
    /// leaves the index exactly as it was. Bytes that are not valid UTF-8
    /// are decoded lossily and end up as word delimiters.
    pub fn ingest_reader<R: BufRead>(&mut self, document: &str, mut reader: R) -> Result<()> {
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|source| {
                IndexError::DocumentUnreadable {
                    document: document.to_owned(),
                    source,
                }
            })?;
            if read == 0 {
                break;
            }
            if buf.ends_with(b"\n") {
                buf.pop();
                if buf.ends_with(b"\r") {
                    buf.pop();
                }
            }
            lines.push(String::from_utf8_lossy(&buf).into_owned());
        }

        self.ingest_lines(document, lines);
        Ok(())
    }

    /// Add the file at `path`, using the path itself as the document name
    pub fn ingest_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let document = path.display().to_string();

        let file = File::open(path).map_err(|source| IndexError::DocumentUnreadable {
            document: document.clone(),
            source,
        })?;

        self.ingest_reader(&document, BufReader::new(file))
    }

    /// Look up a word (case-insensitive)
    ///
    /// Returns an empty mapping for words that were never indexed.
    pub fn search(&self, word: &str) -> DocumentHits {
        self.postings
            .get(&word.to_ascii_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// The `n` most frequent words with their document hits
    ///
    /// Words with equal counts are picked in no particular order, so which
    /// of several tied words make the cut is unspecified.
    pub fn top_words(&self, n: usize) -> TopWords {
        if n == 0 {
            return TopWords::new();
        }
        if n >= self.counts.len() {
            return self.postings.clone();
        }

        // Min-heap holding the best `n` seen so far
        let mut heap = BinaryHeap::with_capacity(n + 1);
        for (word, &count) in &self.counts {
            heap.push(Reverse((count, word.as_str())));
            if heap.len() > n {
                heap.pop();
            }
        }

        heap.into_iter()
            .map(|Reverse((_, word))| (word.to_owned(), self.search(word)))
            .collect()
    }

    /// Total occurrences of a word (case-insensitive), 0 if never seen
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(&word.to_ascii_lowercase()).copied().unwrap_or(0)
    }

    /// Fold another index into this one
    ///
    /// Sentence sets are unioned and counts summed, so building one index
    /// per document and merging them gives the same result as ingesting
    /// the documents one after another.
    pub fn merge(&mut self, other: Index) {
        for (word, hits) in other.postings {
            let entry = self.postings.entry(word).or_default();
            for (document, sentences) in hits {
                entry.entry(document).or_default().extend(sentences);
            }
        }
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
        self.documents.extend(other.documents);
        self.total_occurrences += other.total_occurrences;
    }

    /// Get index statistics
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            num_documents: self.documents.len(),
            num_words: self.counts.len(),
            total_occurrences: self.total_occurrences,
        }
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

/// Index statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub num_documents: usize,
    pub num_words: usize,
    pub total_occurrences: u64,
}
