//! Sentence and word tokenizer
//!
//! Splits each line into sentences at terminator punctuation, then splits
//! sentences into lowercase ASCII-alphabetic words.

/// Characters that end a sentence when followed by whitespace
pub const DEFAULT_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// A sentence fragment together with the words found in it, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub words: Vec<String>,
}

/// Line-oriented sentence tokenizer
///
/// Lines are never joined: a sentence that wraps onto the next line is
/// recorded as two separate fragments.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Sentence terminators (default: `.`, `!`, `?`)
    pub terminators: Vec<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            terminators: DEFAULT_TERMINATORS.to_vec(),
        }
    }
}

impl Tokenizer {
    /// Create a tokenizer with a custom set of sentence terminators
    pub fn new(terminators: impl Into<Vec<char>>) -> Self {
        Self {
            terminators: terminators.into(),
        }
    }

    /// Tokenize a sequence of lines into sentences and their words
    ///
    /// Sentences without any word are kept; they simply index nothing.
    pub fn tokenize<I, S>(&self, lines: I) -> Vec<Sentence>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .flat_map(|line| {
                self.split_sentences(line.as_ref())
                    .into_iter()
                    .map(|text| Sentence {
                        words: words(text),
                        text: text.to_owned(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Split one line into trimmed, non-empty sentences
    ///
    /// A split happens after a terminator that is immediately followed by
    /// ASCII whitespace; the whitespace run itself is dropped. Other
    /// whitespace such as U+00A0 is treated as ordinary text.
    pub fn split_sentences<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let line = trim_ascii_whitespace(line);
        let mut sentences = Vec::new();
        let mut push = |candidate: &'a str| {
            let candidate = trim_ascii_whitespace(candidate);
            if !candidate.is_empty() {
                sentences.push(candidate);
            }
        };

        let mut start = 0;
        let mut chars = line.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if !self.terminators.contains(&c) {
                continue;
            }
            if !matches!(chars.peek(), Some((_, next)) if next.is_ascii_whitespace()) {
                continue;
            }
            push(&line[start..i + c.len_utf8()]);
            while chars.next_if(|(_, ch)| ch.is_ascii_whitespace()).is_some() {}
            start = chars.peek().map_or(line.len(), |&(j, _)| j);
        }
        push(&line[start..]);

        sentences
    }
}

fn trim_ascii_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace())
}

/// Split text into lowercase words at every run of non `a-zA-Z` characters
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect()
}
