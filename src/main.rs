//! CLI for vocab2doc - renders vocabularies and query results as documents

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vocab2doc::document::{Column, Columns};
use vocab2doc::{logging, DocumentGenerator, ParagraphMode, RenderOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level, e.g. warn, info, debug (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Wrap text in <p> tags instead of using <br/> for line breaks
    #[arg(long, global = true)]
    paragraphs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a Term/Definition glossary from SPARQL JSON results
    Vocabulary {
        /// Query results with term, definition, source, spec and synonym variables
        input: PathBuf,

        /// Output document path
        output: PathBuf,

        /// Output format: html or md
        #[arg(long, short, default_value = "html")]
        format: String,

        /// Separate query results with term and synonym variables
        #[arg(long)]
        synonyms: Option<PathBuf>,

        /// Drop synonyms that sort after the last term
        #[arg(long)]
        drop_trailing_synonyms: bool,
    },

    /// Generate a table with one row per query solution
    Table {
        /// Query results file
        input: PathBuf,

        /// Output document path
        output: PathBuf,

        /// Output format: html or md
        #[arg(long, short, default_value = "html")]
        format: String,

        /// Comma-separated variables to show, optionally as var=Title (default: all)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
    },

    /// Render a single text and print it
    Text {
        /// Text to render
        text: String,

        /// Output format: html or md
        #[arg(long, short, default_value = "html")]
        format: String,
    },
}

fn parse_columns(specs: &[String]) -> Columns {
    if specs.is_empty() {
        return Columns::Derived;
    }
    Columns::Explicit(
        specs
            .iter()
            .map(|spec| match spec.split_once('=') {
                Some((field, title)) => Column::new(field.trim(), title.trim()),
                None => Column::titled(spec.trim()),
            })
            .collect(),
    )
}

fn main() {
    let args = Args::parse();

    let _logger = match logging::init_logging(&args.log_level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Error initialising logging: {}", e);
            None
        }
    };

    let mut options = RenderOptions::default();
    if args.paragraphs {
        options.paragraph_mode = Some(ParagraphMode::UseParagraphTags);
    }

    let result = match args.command {
        Command::Vocabulary {
            input,
            output,
            format,
            synonyms,
            drop_trailing_synonyms,
        } => {
            options.flush_trailing_synonyms = !drop_trailing_synonyms;
            DocumentGenerator::new(options)
                .generate_vocabulary(&input, synonyms.as_deref(), &output, &format)
                .map(|stats| {
                    println!(
                        "Wrote {} terms and {} synonyms to {:?}",
                        stats.terms, stats.synonyms, output
                    )
                })
        }
        Command::Table {
            input,
            output,
            format,
            columns,
        } => DocumentGenerator::new(options)
            .generate_table(&input, &parse_columns(&columns), &output, &format)
            .map(|rows| println!("Wrote {} rows to {:?}", rows, output)),
        Command::Text { text, format } => DocumentGenerator::new(options)
            .render_text(&text, &format)
            .map(|rendered| println!("{}", rendered)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
