//! HTML formatter.

use super::{TextFormatter, NEWLINE};
use crate::render::{escape_html_attr, InlineRenderer, ParagraphMode};
use crate::{RenderOptions, Result};
use std::io::Write;

/// Formats the structure of a document as HTML.
///
/// Cell text is rendered with line breaks rather than paragraph tags
/// unless [`RenderOptions::paragraph_mode`] says otherwise.
#[derive(Debug, Clone)]
pub struct HtmlFormatter {
    renderer: InlineRenderer,
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}

impl HtmlFormatter {
    pub fn new(options: &RenderOptions) -> Self {
        let mode = options
            .paragraph_mode
            .unwrap_or(ParagraphMode::UseLineBreakTag);
        Self {
            renderer: InlineRenderer::html(mode),
        }
    }
}

impl TextFormatter for HtmlFormatter {
    fn render(&mut self, out: &mut dyn Write, text: &str) -> Result<()> {
        self.renderer.render_to(text, out)?;
        Ok(())
    }

    fn start_table(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"<table>")?;
        Ok(())
    }

    fn end_table(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"</table>")?;
        Ok(())
    }

    fn start_row(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"<tr>")?;
        Ok(())
    }

    fn end_row(&mut self, out: &mut dyn Write) -> Result<()> {
        write!(out, "</tr>{}", NEWLINE)?;
        Ok(())
    }

    fn start_column_heading(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"<th>")?;
        Ok(())
    }

    fn end_column_heading(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"</th>")?;
        Ok(())
    }

    fn start_cell(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"<td>")?;
        Ok(())
    }

    fn end_cell(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"</td>")?;
        Ok(())
    }

    fn start_bold(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"<b>")?;
        Ok(())
    }

    fn end_bold(&mut self, out: &mut dyn Write) -> Result<()> {
        out.write_all(b"</b>")?;
        Ok(())
    }

    fn line_break(&mut self, out: &mut dyn Write) -> Result<()> {
        write!(out, "<br/>{}", NEWLINE)?;
        Ok(())
    }

    fn link(&mut self, out: &mut dyn Write, url: &str, text: &str) -> Result<()> {
        write!(
            out,
            "<a href=\"{}\">{}</a>",
            escape_html_attr(url),
            escape_html_attr(text)
        )?;
        Ok(())
    }
}
