//! Vocabulary glossary - term rows merged with alias rows in key order.

use super::{write_cell, write_column_titles};
use crate::format::TextFormatter;
use crate::source::RecordSource;
use crate::{RenderOptions, Result};
use std::collections::BTreeMap;
use std::io::Write;

pub const TERM: &str = "term";
pub const DEFINITION: &str = "definition";
pub const SOURCE: &str = "source";
pub const SPEC: &str = "spec";
pub const SYNONYM: &str = "synonym";

const COLUMN_TITLES: [&str; 2] = ["Term", "Definition"];

/// Aliases of vocabulary terms, ordered by alias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymIndex {
    entries: BTreeMap<String, String>,
}

impl SynonymIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects `synonym -> term` pairs from records carrying both fields.
    /// Records with an empty or absent synonym are skipped. The source is
    /// closed afterwards.
    pub fn from_source<S: RecordSource + ?Sized>(source: &mut S) -> Result<Self> {
        let mut index = Self::new();
        let collected = index.collect(source);
        let closed = source.close();
        collected?;
        closed?;
        log::debug!("collected {} synonyms", index.len());
        Ok(index)
    }

    fn collect<S: RecordSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        while let Some(record) = source.next_record()? {
            let synonym = record.value_or_empty(SYNONYM);
            if !synonym.is_empty() {
                self.insert(synonym, record.value_or_empty(TERM));
            }
        }
        Ok(())
    }

    /// Adds an alias. A later entry for the same alias replaces the earlier one.
    pub fn insert(&mut self, alias: impl Into<String>, term: impl Into<String>) {
        self.entries.insert(alias.into(), term.into());
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }
}

/// Counts of rows written for a vocabulary document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VocabularyStats {
    pub terms: usize,
    pub synonyms: usize,
    /// Aliases sorting after the last term that were not written.
    pub dropped_synonyms: usize,
}

/// Writes a two-column `Term | Definition` glossary.
///
/// Terms must arrive in ascending order. Before each term row, every alias
/// sorting before the term is written as an `alias | See: term` row.
#[derive(Debug, Clone)]
pub struct VocabularyWriter {
    flush_trailing_synonyms: bool,
}

impl Default for VocabularyWriter {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}

impl VocabularyWriter {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            flush_trailing_synonyms: options.flush_trailing_synonyms,
        }
    }

    /// Writes the glossary and closes `terms`, also when writing fails.
    pub fn write<S, F>(
        &self,
        terms: &mut S,
        synonyms: &SynonymIndex,
        formatter: &mut F,
        out: &mut dyn Write,
    ) -> Result<VocabularyStats>
    where
        S: RecordSource + ?Sized,
        F: TextFormatter + ?Sized,
    {
        let result = self.write_rows(terms, synonyms, formatter, out);
        let closed = terms.close();
        let stats = result?;
        closed?;
        Ok(stats)
    }

    fn write_rows<S, F>(
        &self,
        terms: &mut S,
        synonyms: &SynonymIndex,
        formatter: &mut F,
        out: &mut dyn Write,
    ) -> Result<VocabularyStats>
    where
        S: RecordSource + ?Sized,
        F: TextFormatter + ?Sized,
    {
        let mut stats = VocabularyStats::default();
        let mut pending = synonyms.iter().peekable();

        formatter.start_table(out)?;
        write_column_titles(formatter, out, COLUMN_TITLES)?;

        while let Some(record) = terms.next_record()? {
            let term = record.value_or_empty(TERM);

            while let Some((alias, target)) = pending.next_if(|(alias, _)| *alias < term) {
                Self::write_synonym_row(formatter, out, alias, target)?;
                stats.synonyms += 1;
            }

            formatter.start_row(out)?;
            write_cell(formatter, out, term)?;
            formatter.start_cell(out)?;
            formatter.render(out, record.value_or_empty(DEFINITION))?;
            Self::write_annotation(formatter, out, "Source: ", record.value_or_empty(SOURCE))?;
            Self::write_annotation(
                formatter,
                out,
                "Specification: ",
                record.value_or_empty(SPEC),
            )?;
            formatter.end_cell(out)?;
            formatter.end_row(out)?;
            stats.terms += 1;
        }

        if self.flush_trailing_synonyms {
            for (alias, target) in pending {
                Self::write_synonym_row(formatter, out, alias, target)?;
                stats.synonyms += 1;
            }
        } else {
            stats.dropped_synonyms = pending.count();
            if stats.dropped_synonyms > 0 {
                log::warn!(
                    "{} synonyms sort after the last term and were not written",
                    stats.dropped_synonyms
                );
            }
        }

        formatter.end_table(out)?;
        log::info!(
            "wrote vocabulary with {} terms and {} synonyms",
            stats.terms,
            stats.synonyms
        );
        Ok(stats)
    }

    fn write_synonym_row<F: TextFormatter + ?Sized>(
        formatter: &mut F,
        out: &mut dyn Write,
        alias: &str,
        target: &str,
    ) -> Result<()> {
        formatter.start_row(out)?;
        write_cell(formatter, out, alias)?;
        formatter.start_cell(out)?;
        formatter.start_bold(out)?;
        formatter.render(out, "See: ")?;
        formatter.end_bold(out)?;
        formatter.render(out, target)?;
        formatter.end_cell(out)?;
        formatter.end_row(out)
    }

    // Nothing is written for an empty value.
    fn write_annotation<F: TextFormatter + ?Sized>(
        formatter: &mut F,
        out: &mut dyn Write,
        label: &str,
        value: &str,
    ) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        formatter.line_break(out)?;
        formatter.start_bold(out)?;
        formatter.render(out, label)?;
        formatter.end_bold(out)?;
        formatter.render(out, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Dialect, HtmlFormatter};
    use crate::source::{MemorySource, Record};
    use crate::Error;
    use pretty_assertions::assert_eq;
    use std::io;

    /// Accepts a fixed number of writes, then fails every write.
    struct FailingSink {
        writes_left: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes_left == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.writes_left -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn terms(names: &[&str]) -> MemorySource {
        MemorySource::from_records(
            names
                .iter()
                .map(|n| Record::new().with(TERM, *n).with(DEFINITION, format!("def {n}")))
                .collect(),
        )
    }

    fn index(pairs: &[(&str, &str)]) -> SynonymIndex {
        let mut index = SynonymIndex::new();
        for (alias, term) in pairs {
            index.insert(*alias, *term);
        }
        index
    }

    fn first_cells(html: &str) -> Vec<String> {
        html.lines()
            .filter_map(|line| {
                let start = line.find("<td>")? + 4;
                let end = line[start..].find("</td>")? + start;
                Some(line[start..end].to_string())
            })
            .collect()
    }

    #[test]
    fn test_synonyms_merged_before_greater_terms() {
        let mut out = Vec::new();
        let stats = VocabularyWriter::default()
            .write(
                &mut terms(&["Beta", "Delta"]),
                &index(&[("Alpha", "Beta"), ("Charlie", "Delta"), ("Echo", "Beta")]),
                &mut HtmlFormatter::default(),
                &mut out,
            )
            .unwrap();
        let html = String::from_utf8(out).unwrap();

        assert_eq!(
            first_cells(&html),
            vec!["Alpha", "Beta", "Charlie", "Delta", "Echo"]
        );
        assert!(html.contains("<tr><td>Alpha</td><td><b>See: </b>Beta</td></tr>\n"));
        assert_eq!(
            stats,
            VocabularyStats {
                terms: 2,
                synonyms: 3,
                dropped_synonyms: 0
            }
        );
    }

    #[test]
    fn test_legacy_mode_drops_trailing_synonyms() {
        let options = RenderOptions {
            flush_trailing_synonyms: false,
            ..Default::default()
        };
        let mut out = Vec::new();
        let stats = VocabularyWriter::new(&options)
            .write(
                &mut terms(&["Beta"]),
                &index(&[("Alpha", "Beta"), ("Zulu", "Beta")]),
                &mut HtmlFormatter::default(),
                &mut out,
            )
            .unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(!html.contains("Zulu"));
        assert_eq!(stats.dropped_synonyms, 1);
        assert_eq!(stats.synonyms, 1);
    }

    #[test]
    fn test_equal_alias_and_term_keeps_term_first() {
        let mut out = Vec::new();
        VocabularyWriter::default()
            .write(
                &mut terms(&["Same"]),
                &index(&[("Same", "Other")]),
                &mut HtmlFormatter::default(),
                &mut out,
            )
            .unwrap();
        let html = String::from_utf8(out).unwrap();
        assert_eq!(first_cells(&html), vec!["Same", "Same"]);
        assert!(html.lines().nth(1).unwrap().contains("def Same"));
    }

    #[test]
    fn test_annotations_markdown() {
        let mut source = MemorySource::from_records(vec![Record::new()
            .with(TERM, "Order")
            .with(DEFINITION, "A request")
            .with(SOURCE, "FIX")
            .with(SPEC, "")]);
        let mut formatter = Dialect::Markdown.formatter(&RenderOptions::default());
        let mut out = Vec::new();
        VocabularyWriter::default()
            .write(&mut source, &SynonymIndex::new(), &mut formatter, &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "| Term | Definition |\n| - | - |\n| Order | A request\n\n**Source: **FIX |\n"
        );
    }

    #[test]
    fn test_annotations_html() {
        let mut source = MemorySource::from_records(vec![Record::new()
            .with(TERM, "Order")
            .with(DEFINITION, "A request")
            .with(SOURCE, "FIX")
            .with(SPEC, "Volume 1")]);
        let mut out = Vec::new();
        VocabularyWriter::default()
            .write(
                &mut source,
                &SynonymIndex::new(),
                &mut HtmlFormatter::default(),
                &mut out,
            )
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<table><tr><th>Term</th><th>Definition</th></tr>\n\
             <tr><td>Order</td><td>A request<br/>\n<b>Source: </b>FIX<br/>\n\
             <b>Specification: </b>Volume 1</td></tr>\n</table>"
        );
    }

    #[test]
    fn test_synonym_index_from_source() {
        let mut source = MemorySource::from_records(vec![
            Record::new().with(TERM, "Order").with(SYNONYM, "Request"),
            Record::new().with(TERM, "Trade").with(SYNONYM, ""),
            Record::new().with(TERM, "Execution").with(SYNONYM, "Fill"),
        ]);
        let index = SynonymIndex::from_source(&mut source).unwrap();
        assert_eq!(
            index.iter().collect::<Vec<_>>(),
            vec![("Fill", "Execution"), ("Request", "Order")]
        );
        assert_eq!(index.get("Request"), Some("Order"));
        assert_eq!(index.get("Trade"), None);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_terms_closed_when_sink_fails() {
        let mut source = terms(&["Beta", "Delta"]);
        let result = VocabularyWriter::default().write(
            &mut source,
            &index(&[("Alpha", "Beta")]),
            &mut HtmlFormatter::default(),
            &mut FailingSink { writes_left: 6 },
        );
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(source.remaining(), 0);
    }
}
