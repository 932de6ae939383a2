//! Record source over SPARQL 1.1 query results in JSON format.

use super::{Record, RecordSource};
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ResultsDocument {
    head: Head,
    results: Results,
}

#[derive(Debug, Deserialize)]
struct Head {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Results {
    #[serde(default)]
    bindings: Vec<HashMap<String, Binding>>,
}

/// A bound RDF term. Literals, IRIs and blank nodes all render as their
/// lexical value, so the term type is not read.
#[derive(Debug, Deserialize)]
struct Binding {
    value: String,
}

/// Reads the result set of a `SELECT` query serialized as
/// `application/sparql-results+json`.
///
/// Records carry the projected variables in `head.vars` order; variables
/// left unbound in a solution are absent from its record.
#[derive(Debug)]
pub struct SparqlJsonSource {
    vars: Vec<String>,
    solutions: VecDeque<HashMap<String, Binding>>,
}

impl SparqlJsonSource {
    /// Opens a results file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::MissingInput(format!("query results {}: {}", path.display(), e))
        })?;
        log::debug!("reading query results from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: ResultsDocument = serde_json::from_reader(reader)?;
        Ok(Self::from_document(document))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let document: ResultsDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: ResultsDocument) -> Self {
        log::debug!(
            "query results: {} variables, {} solutions",
            document.head.vars.len(),
            document.results.bindings.len()
        );
        Self {
            vars: document.head.vars,
            solutions: document.results.bindings.into(),
        }
    }
}

impl RecordSource for SparqlJsonSource {
    fn field_names(&self) -> &[String] {
        &self.vars
    }

    fn next_record(&mut self) -> Result<Option<Record>> {
        let Some(mut solution) = self.solutions.pop_front() else {
            return Ok(None);
        };
        let mut record = Record::new();
        for var in &self.vars {
            record.insert(var.as_str(), solution.remove(var).map(|b| b.value));
        }
        Ok(Some(record))
    }

    fn close(&mut self) -> Result<()> {
        self.solutions.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS: &str = r#"{
      "head": { "vars": ["term", "definition", "synonym"] },
      "results": { "bindings": [
        {
          "term": { "type": "literal", "value": "Order", "xml:lang": "en" },
          "definition": { "type": "literal", "value": "A request to trade" }
        },
        {
          "term": { "type": "uri", "value": "http://example.org/Trade" },
          "synonym": { "type": "literal", "value": "Deal" }
        }
      ] }
    }"#;

    #[test]
    fn test_reads_bindings_in_var_order() {
        let mut source = SparqlJsonSource::from_json(RESULTS).unwrap();
        assert_eq!(source.field_names(), ["term", "definition", "synonym"]);

        let first = source.next_record().unwrap().unwrap();
        assert_eq!(first.value_of("term"), Some("Order"));
        assert_eq!(first.value_of("definition"), Some("A request to trade"));
        assert!(!first.has_field("synonym"));

        let second = source.next_record().unwrap().unwrap();
        assert_eq!(second.value_of("term"), Some("http://example.org/Trade"));
        assert_eq!(second.value_of("synonym"), Some("Deal"));
        assert_eq!(second.value_or_empty("definition"), "");

        assert!(source.next_record().unwrap().is_none());
    }

    #[test]
    fn test_missing_file_is_missing_input() {
        let result = SparqlJsonSource::open("/nonexistent/vocab2doc/results.json");
        assert!(matches!(result, Err(Error::MissingInput(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = SparqlJsonSource::from_json("{ \"head\": ");
        assert!(matches!(result, Err(Error::ResultsParse(_))));
    }
}
