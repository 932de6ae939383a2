//! Document drivers - assemble tables from record sources through a formatter.

mod table;
mod vocabulary;

use crate::format::{Dialect, TextFormatter};
use crate::source::{RecordSource, SparqlJsonSource};
use crate::{Error, RenderOptions, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use self::table::{write_table, Column, Columns};
pub use self::vocabulary::{
    SynonymIndex, VocabularyStats, VocabularyWriter, DEFINITION, SOURCE, SPEC, SYNONYM, TERM,
};

/// Writes one cell containing rendered text.
pub fn write_cell<F: TextFormatter + ?Sized>(
    formatter: &mut F,
    out: &mut dyn Write,
    value: &str,
) -> Result<()> {
    formatter.start_cell(out)?;
    formatter.render(out, value)?;
    formatter.end_cell(out)
}

/// Writes the header row.
pub fn write_column_titles<'t, F, I>(formatter: &mut F, out: &mut dyn Write, titles: I) -> Result<()>
where
    F: TextFormatter + ?Sized,
    I: IntoIterator<Item = &'t str>,
{
    formatter.start_row(out)?;
    for title in titles {
        formatter.start_column_heading(out)?;
        formatter.render(out, title)?;
        formatter.end_column_heading(out)?;
    }
    formatter.end_row(out)
}

/// Opens an output file for writing.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

/// Generates documents from SPARQL JSON query results.
#[derive(Debug, Clone, Default)]
pub struct DocumentGenerator {
    options: RenderOptions,
}

impl DocumentGenerator {
    /// Creates a new generator with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Creates a new generator with default options.
    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Generates a vocabulary glossary file.
    ///
    /// # Arguments
    /// * `input` - Query results with `term`, `definition`, `source` and `spec` fields
    /// * `synonyms` - Query results with `term` and `synonym` fields; `input` when `None`
    /// * `output` - Document file to write
    /// * `format` - Dialect code, `"html"` or `"md"`
    pub fn generate_vocabulary<I: AsRef<Path>, O: AsRef<Path>>(
        &self,
        input: I,
        synonyms: Option<&Path>,
        output: O,
        format: &str,
    ) -> Result<VocabularyStats> {
        let dialect: Dialect = format.parse()?;
        let input = input.as_ref();
        let index = SynonymIndex::from_source(&mut SparqlJsonSource::open(
            synonyms.unwrap_or(input),
        )?)?;
        let mut terms = SparqlJsonSource::open(input)?;

        let mut out = create_output(output.as_ref())?;
        let stats = self.write_vocabulary(&mut terms, &index, dialect, &mut out)?;
        out.flush()?;
        Ok(stats)
    }

    /// Writes a vocabulary glossary to a sink.
    pub fn write_vocabulary<S: RecordSource + ?Sized>(
        &self,
        terms: &mut S,
        synonyms: &SynonymIndex,
        dialect: Dialect,
        out: &mut dyn Write,
    ) -> Result<VocabularyStats> {
        let mut formatter = dialect.formatter(&self.options);
        VocabularyWriter::new(&self.options).write(terms, synonyms, &mut formatter, out)
    }

    /// Generates a table file with one row per query solution.
    pub fn generate_table<I: AsRef<Path>, O: AsRef<Path>>(
        &self,
        input: I,
        columns: &Columns,
        output: O,
        format: &str,
    ) -> Result<usize> {
        let dialect: Dialect = format.parse()?;
        let mut source = SparqlJsonSource::open(input)?;
        let mut formatter = dialect.formatter(&self.options);

        let mut out = create_output(output.as_ref())?;
        let rows = write_table(&mut source, &mut formatter, columns, &mut out)?;
        out.flush()?;
        Ok(rows)
    }

    /// Renders a single text in the given dialect.
    pub fn render_text(&self, text: &str, format: &str) -> Result<String> {
        let dialect: Dialect = format.parse()?;
        let mut formatter = dialect.formatter(&self.options);
        let mut out = Vec::new();
        formatter.render(&mut out, text)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
