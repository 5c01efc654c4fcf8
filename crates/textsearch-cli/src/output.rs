//! JSON rendering of query results
//!
//! Keys come out sorted and sentence sets are written as sorted lists, with
//! four-space indentation.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::BTreeMap;
use std::io::Write;
use textsearch_core::{DocumentHits, TopWords};

/// Sorted view over a [`DocumentHits`] mapping
pub type DocumentView<'a> = BTreeMap<&'a str, Vec<&'a str>>;

/// Sorted view of a `search` result
pub fn search_view(hits: &DocumentHits) -> DocumentView<'_> {
    hits.iter()
        .map(|(document, sentences)| {
            let mut sentences: Vec<&str> = sentences.iter().map(String::as_str).collect();
            sentences.sort_unstable();
            (document.as_str(), sentences)
        })
        .collect()
}

/// Sorted view of a `top_words` result
pub fn top_words_view(top: &TopWords) -> BTreeMap<&str, DocumentView<'_>> {
    top.iter()
        .map(|(word, hits)| (word.as_str(), search_view(hits)))
        .collect()
}

/// Write `value` as pretty JSON followed by a newline
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut *writer, formatter);
    value.serialize(&mut serializer)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use textsearch_core::Index;

    fn to_json<T: Serialize>(value: &T) -> String {
        let mut buf = Vec::new();
        write_json(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap().trim_end().to_string()
    }

    #[test]
    fn test_search_output_is_sorted_and_indented() {
        let mut index = Index::new();
        index.ingest("b.txt", "Zebra river. A river!");
        index.ingest("a.txt", "Quiet river.");

        let json = to_json(&search_view(&index.search("river")));
        let expected = r#"{
    "a.txt": [
        "Quiet river."
    ],
    "b.txt": [
        "A river!",
        "Zebra river."
    ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_result_renders_as_empty_object() {
        let index = Index::new();
        assert_eq!(to_json(&search_view(&index.search("zzz"))), "{}");
        assert_eq!(to_json(&top_words_view(&index.top_words(3))), "{}");
    }

    #[test]
    fn test_top_words_output_nests_documents() {
        let mut index = Index::new();
        index.ingest("d", "Ocean ocean wave.");

        let json = to_json(&top_words_view(&index.top_words(1)));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ocean"]["d"][0], "Ocean ocean wave.");
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let mut index = Index::new();
        index.ingest("café.txt", "Naïve river.");

        let json = to_json(&search_view(&index.search("river")));
        assert!(json.contains("\"café.txt\""));
        assert!(json.contains("Naïve river."));
    }
}
