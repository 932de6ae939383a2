//! Inline renderer - converts plain text to markup with paragraph and quote state.

use super::escape::{EscapeTable, Rule};
use std::convert::Infallible;
use std::io::{self, Write};

const PARAGRAPH_OPEN: &str = "<p>";
const PARAGRAPH_CLOSE: &str = "</p>";
const LINE_BREAK: &str = "<br/>";

/// How paragraph boundaries in the input are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphMode {
    /// Wrap text in `<p>` / `</p>` tags.
    #[default]
    UseParagraphTags,
    /// Emit `<br/>` for each boundary.
    UseLineBreakTag,
}

/// Per-call rendering state. A fresh value is created for every top-level
/// render so that quote parity and paragraph counts never leak between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RenderState {
    paragraph_count: u32,
    last_paragraph: Option<u32>,
    quote_parity: u32,
}

impl RenderState {
    /// Emits the next alternating paragraph tag if no tag has been emitted
    /// since the last boundary.
    fn enter_paragraph(&mut self, mode: ParagraphMode) -> Option<&'static str> {
        if mode != ParagraphMode::UseParagraphTags
            || self.last_paragraph == Some(self.paragraph_count)
        {
            return None;
        }
        let tag = if self.paragraph_count % 2 == 0 {
            PARAGRAPH_OPEN
        } else {
            PARAGRAPH_CLOSE
        };
        self.paragraph_count += 1;
        self.last_paragraph = Some(self.paragraph_count);
        Some(tag)
    }

    fn paragraph_open(&self) -> bool {
        self.paragraph_count % 2 == 1
    }

    /// Produces the replacement text for a matched rule.
    fn apply<'r>(&mut self, rule: &'r Rule, mode: ParagraphMode) -> &'r str {
        match rule {
            Rule::Literal { to, .. } => to.as_str(),
            Rule::ParagraphBoundary { .. } => match mode {
                ParagraphMode::UseParagraphTags => {
                    self.paragraph_count = 0;
                    PARAGRAPH_CLOSE
                }
                ParagraphMode::UseLineBreakTag => LINE_BREAK,
            },
            Rule::QuoteAlternator { open, close, .. } => {
                let out = if self.quote_parity % 2 == 0 {
                    open.as_str()
                } else {
                    close.as_str()
                };
                self.quote_parity += 1;
                out
            }
        }
    }
}

/// Renders plain text as inline markup using an [`EscapeTable`].
#[derive(Debug, Clone)]
pub struct InlineRenderer {
    table: EscapeTable,
    mode: ParagraphMode,
}

impl Default for InlineRenderer {
    fn default() -> Self {
        Self::new(EscapeTable::html(), ParagraphMode::default())
    }
}

impl InlineRenderer {
    pub fn new(table: EscapeTable, mode: ParagraphMode) -> Self {
        Self { table, mode }
    }

    pub fn html(mode: ParagraphMode) -> Self {
        Self::new(EscapeTable::html(), mode)
    }

    pub fn markdown() -> Self {
        Self::new(EscapeTable::markdown(), ParagraphMode::UseLineBreakTag)
    }

    /// Renders `input` to a new string.
    pub fn render(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let result: Result<(), Infallible> = self.render_with(input, |fragment| {
            out.push_str(fragment);
            Ok(())
        });
        match result {
            Ok(()) => out,
            Err(never) => match never {},
        }
    }

    /// Renders `input` incrementally to an output sink.
    pub fn render_to(&self, input: &str, out: &mut dyn Write) -> io::Result<()> {
        self.render_with(input, |fragment| out.write_all(fragment.as_bytes()))
    }

    /// Streams rendered fragments of `input` to `emit`.
    ///
    /// Unmatched characters are passed through in contiguous runs. Empty
    /// input produces no output at all, not even paragraph tags.
    pub fn render_with<E>(
        &self,
        input: &str,
        mut emit: impl FnMut(&str) -> Result<(), E>,
    ) -> Result<(), E> {
        if input.is_empty() {
            return Ok(());
        }

        let mut state = RenderState::default();
        let mut pos = 0;
        // start of literal text not yet emitted
        let mut pending = 0;

        while let Some(ch) = input[pos..].chars().next() {
            let opening = state.enter_paragraph(self.mode);
            let rule = self.table.find(&input[pos..]);

            if opening.is_some() || rule.is_some() {
                if pending < pos {
                    emit(&input[pending..pos])?;
                }
                if let Some(tag) = opening {
                    emit(tag)?;
                }
                pending = pos;
            }

            match rule {
                Some(rule) => {
                    emit(state.apply(rule, self.mode))?;
                    pos += rule.trigger().len();
                    pending = pos;
                }
                None => pos += ch.len_utf8(),
            }
        }

        if pending < pos {
            emit(&input[pending..pos])?;
        }
        if self.mode == ParagraphMode::UseParagraphTags && state.paragraph_open() {
            emit(PARAGRAPH_CLOSE)?;
        }
        Ok(())
    }
}
