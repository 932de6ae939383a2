//! # vocab2doc
//!
//! Renders controlled vocabularies and other query results as HTML or
//! Markdown tables.
//!
//! Plain text is escaped for the target dialect by an ordered table of
//! substitution rules, while a [`format::TextFormatter`] writes the table
//! structure around it.
//!
//! ## Example
//!
//! ```no_run
//! use vocab2doc::{DocumentGenerator, RenderOptions};
//!
//! let generator = DocumentGenerator::new(RenderOptions::default());
//! let stats = generator
//!     .generate_vocabulary("terms.json", None, "Vocabulary.md", "md")
//!     .unwrap();
//! println!("{} terms", stats.terms);
//! ```

pub mod document;
pub mod error;
pub mod format;
pub mod logging;
pub mod render;
pub mod source;
pub mod text;

pub use document::DocumentGenerator;
pub use error::{Error, Result};
pub use format::{Dialect, Formatter, TextFormatter};
pub use render::{InlineRenderer, ParagraphMode};

/// Options for document generation.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// How line breaks inside cell text are rendered. `None` uses the
    /// dialect default, which is `<br/>` for both dialects.
    pub paragraph_mode: Option<ParagraphMode>,
    /// Whether aliases sorting after the last vocabulary term are written.
    pub flush_trailing_synonyms: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            paragraph_mode: None,
            flush_trailing_synonyms: true,
        }
    }
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;

    fn to_py_err(e: Error) -> PyErr {
        match e {
            Error::InvalidArgument(msg) => {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(msg)
            }
            other => PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(other.to_string()),
        }
    }

    /// Renders plain text as HTML or Markdown.
    #[pyfunction]
    fn render_text(text: String, format: String) -> PyResult<String> {
        DocumentGenerator::with_defaults()
            .render_text(&text, &format)
            .map_err(to_py_err)
    }

    /// Generates a vocabulary document from SPARQL JSON results.
    #[pyfunction]
    fn generate_vocabulary(input: String, output: String, format: String) -> PyResult<usize> {
        DocumentGenerator::with_defaults()
            .generate_vocabulary(&input, None, &output, &format)
            .map(|stats| stats.terms)
            .map_err(to_py_err)
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn vocab2doc(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(render_text, m)?)?;
        m.add_function(wrap_pyfunction!(generate_vocabulary, m)?)?;
        Ok(())
    }
}
