//! Markdown formatter.
//!
//! Table layout is not standardized in Markdown; this follows the common
//! pipe-table style, including GitHub Flavored Markdown.

use super::{TextFormatter, NEWLINE};
use crate::render::{
    escape_markdown_link_destination, escape_markdown_link_text, EscapeTable, InlineRenderer,
    ParagraphMode,
};
use crate::{RenderOptions, Result};
use std::io::Write;

/// Formats the structure of a document as a Markdown pipe table.
///
/// The column count is learned from the column headings of the header row.
/// The separator row is written right after that row and the count is reset,
/// so body rows never get a separator.
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    renderer: InlineRenderer,
    columns: usize,
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}

impl MarkdownFormatter {
    pub fn new(options: &RenderOptions) -> Self {
        let mode = options
            .paragraph_mode
            .unwrap_or(ParagraphMode::UseLineBreakTag);
        Self {
            renderer: InlineRenderer::new(EscapeTable::markdown(), mode),
            columns: 0,
        }
    }
}

impl TextFormatter for MarkdownFormatter {
    fn render(&mut self, out: &mut dyn Write, text: &str) -> Result<()> {
        self.renderer.render_to(text, out)?;
        Ok(())
    }

    fn start_table(&mut self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn end_table(&mut self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn start_row(&mut self, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    // The space before the closing pipe comes from the last cell's end.
    fn end_row(&mut self, out: &mut dyn Write) -> Result<()> {
        write!(out, "|{}", NEWLINE)?;
        if self.columns > 0 {
            for _ in 0..self.columns {
                out.write_all(b"| - ")?;
            }
            write!(out, "|{}", NEWLINE)?;
            self.columns = 0;
        }
        Ok(())
    }

    fn start_column_heading(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"| ")?;
        self.columns += 1;
        Ok(())
    }

    fn end_column_heading(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b" ")?;
        Ok(())
    }

    fn start_cell(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"| ")?;
        Ok(())
    }

    fn end_cell(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b" ")?;
        Ok(())
    }

    fn start_bold(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"**")?;
        Ok(())
    }

    fn end_bold(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"**")?;
        Ok(())
    }

    fn line_break(&mut self, out: &mut dyn Write) -> Result<()> {
        write!(out, "{}{}", NEWLINE, NEWLINE)?;
        Ok(())
    }

    fn link(&mut self, out: &mut dyn Write, url: &str, text: &str) -> Result<()> {
        write!(
            out,
            "[{}]({})",
            escape_markdown_link_text(text),
            escape_markdown_link_destination(url)
        )?;
        Ok(())
    }
}
