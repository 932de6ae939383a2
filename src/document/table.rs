//! Generic table driver - one row per record, one cell per column.

use super::{write_cell, write_column_titles};
use crate::format::TextFormatter;
use crate::source::RecordSource;
use crate::text::to_title_case;
use crate::Result;
use std::io::Write;

/// A table column: the record field it shows and its heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub field: String,
    pub title: String,
}

impl Column {
    pub fn new(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            title: title.into(),
        }
    }

    /// A column titled with the title-cased field name.
    pub fn titled(field: impl Into<String>) -> Self {
        let field = field.into();
        let title = to_title_case(&field);
        Self { field, title }
    }
}

/// Which columns a table shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Columns {
    /// One column per source field, titled from the field name.
    #[default]
    Derived,
    Explicit(Vec<Column>),
}

impl Columns {
    /// Explicit columns titled from their field names.
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Columns::Explicit(fields.into_iter().map(Column::titled).collect())
    }

    pub fn resolve(&self, field_names: &[String]) -> Vec<Column> {
        match self {
            Columns::Derived => field_names.iter().map(Column::titled).collect(),
            Columns::Explicit(columns) => columns.clone(),
        }
    }
}

/// Writes a whole table for `source`: table start, the header row, one row
/// per record and table end. Absent fields become empty cells. The source
/// is closed afterwards, also when writing fails.
///
/// Returns the number of body rows written.
pub fn write_table<S, F>(
    source: &mut S,
    formatter: &mut F,
    columns: &Columns,
    out: &mut dyn Write,
) -> Result<usize>
where
    S: RecordSource + ?Sized,
    F: TextFormatter + ?Sized,
{
    let result = write_rows(source, formatter, columns, out);
    let closed = source.close();
    let rows = result?;
    closed?;
    Ok(rows)
}

fn write_rows<S, F>(
    source: &mut S,
    formatter: &mut F,
    columns: &Columns,
    out: &mut dyn Write,
) -> Result<usize>
where
    S: RecordSource + ?Sized,
    F: TextFormatter + ?Sized,
{
    let columns = columns.resolve(source.field_names());
    log::debug!("writing table with {} columns", columns.len());

    formatter.start_table(out)?;
    write_column_titles(formatter, out, columns.iter().map(|c| c.title.as_str()))?;

    let mut rows = 0;
    while let Some(record) = source.next_record()? {
        formatter.start_row(out)?;
        for column in &columns {
            write_cell(formatter, out, record.value_or_empty(&column.field))?;
        }
        formatter.end_row(out)?;
        rows += 1;
    }

    formatter.end_table(out)?;
    log::info!("wrote table with {} rows", rows);
    Ok(rows)
}
