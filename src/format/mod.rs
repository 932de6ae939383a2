//! Formatter protocol - structural markup for HTML and Markdown documents.

mod html;
mod markdown;

use crate::{Error, RenderOptions, Result};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub use self::html::HtmlFormatter;
pub use self::markdown::MarkdownFormatter;

/// Line terminator written after rows and line breaks.
pub(crate) const NEWLINE: &str = "\n";

/// Writes the structure of a document for one markup dialect.
///
/// Every operation appends to `out` and never seeks or rewrites. Callers are
/// responsible for emitting the same number of cells in every row.
pub trait TextFormatter {
    /// Renders plain text in the destination encoding.
    fn render(&mut self, out: &mut dyn Write, text: &str) -> Result<()>;

    fn start_table(&mut self, out: &mut dyn Write) -> Result<()>;

    fn end_table(&mut self, out: &mut dyn Write) -> Result<()>;

    fn start_row(&mut self, out: &mut dyn Write) -> Result<()>;

    fn end_row(&mut self, out: &mut dyn Write) -> Result<()>;

    fn start_column_heading(&mut self, out: &mut dyn Write) -> Result<()>;

    fn end_column_heading(&mut self, out: &mut dyn Write) -> Result<()>;

    fn start_cell(&mut self, out: &mut dyn Write) -> Result<()>;

    fn end_cell(&mut self, out: &mut dyn Write) -> Result<()>;

    fn start_bold(&mut self, out: &mut dyn Write) -> Result<()>;

    fn end_bold(&mut self, out: &mut dyn Write) -> Result<()>;

    fn line_break(&mut self, out: &mut dyn Write) -> Result<()>;

    /// Writes a hyperlink to `url` displaying `text`.
    fn link(&mut self, out: &mut dyn Write, url: &str, text: &str) -> Result<()>;
}

/// Supported output dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Html,
    Markdown,
}

impl Dialect {
    /// Code for HTML output.
    pub const HTML: &'static str = "html";
    /// Code for Markdown output.
    pub const MARKDOWN: &'static str = "md";

    pub fn code(self) -> &'static str {
        match self {
            Dialect::Html => Self::HTML,
            Dialect::Markdown => Self::MARKDOWN,
        }
    }

    /// Creates a formatter for this dialect.
    pub fn formatter(self, options: &RenderOptions) -> Formatter {
        match self {
            Dialect::Html => Formatter::Html(HtmlFormatter::new(options)),
            Dialect::Markdown => Formatter::Markdown(MarkdownFormatter::new(options)),
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        match code {
            Self::HTML => Ok(Dialect::Html),
            Self::MARKDOWN => Ok(Dialect::Markdown),
            other => Err(Error::InvalidArgument(format!(
                "unknown format code '{}', expected '{}' or '{}'",
                other,
                Self::HTML,
                Self::MARKDOWN
            ))),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Creates a formatter from a dialect code such as `"html"` or `"md"`.
pub fn create(code: &str, options: &RenderOptions) -> Result<Formatter> {
    Ok(code.parse::<Dialect>()?.formatter(options))
}

/// A formatter for one of the supported dialects.
#[derive(Debug, Clone)]
pub enum Formatter {
    Html(HtmlFormatter),
    Markdown(MarkdownFormatter),
}

impl Formatter {
    pub fn dialect(&self) -> Dialect {
        match self {
            Formatter::Html(_) => Dialect::Html,
            Formatter::Markdown(_) => Dialect::Markdown,
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $f:ident => $call:expr) => {
        match $self {
            Formatter::Html($f) => $call,
            Formatter::Markdown($f) => $call,
        }
    };
}

impl TextFormatter for Formatter {
    fn render(&mut self, out: &mut dyn Write, text: &str) -> Result<()> {
        dispatch!(self, f => f.render(out, text))
    }

    fn start_table(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.start_table(out))
    }

    fn end_table(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.end_table(out))
    }

    fn start_row(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.start_row(out))
    }

    fn end_row(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.end_row(out))
    }

    fn start_column_heading(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.start_column_heading(out))
    }

    fn end_column_heading(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.end_column_heading(out))
    }

    fn start_cell(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.start_cell(out))
    }

    fn end_cell(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.end_cell(out))
    }

    fn start_bold(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.start_bold(out))
    }

    fn end_bold(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.end_bold(out))
    }

    fn line_break(&mut self, out: &mut dyn Write) -> Result<()> {
        dispatch!(self, f => f.line_break(out))
    }

    fn link(&mut self, out: &mut dyn Write, url: &str, text: &str) -> Result<()> {
        dispatch!(self, f => f.link(out, url, text))
    }
}
