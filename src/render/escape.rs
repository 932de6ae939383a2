//! Escape/transform table - ordered substitution rules for inline text.

use std::cmp::Ordering;

/// A substitution rule keyed by a literal trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Replace the trigger with fixed text.
    Literal { from: String, to: String },
    /// The trigger separates paragraphs; its output depends on the paragraph mode.
    ParagraphBoundary { from: String },
    /// Odd occurrences produce `open`, even occurrences produce `close`.
    QuoteAlternator {
        from: String,
        open: String,
        close: String,
    },
}

impl Rule {
    pub fn literal(from: impl Into<String>, to: impl Into<String>) -> Self {
        Rule::Literal {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn paragraph_boundary(from: impl Into<String>) -> Self {
        Rule::ParagraphBoundary { from: from.into() }
    }

    pub fn quote_alternator(
        from: impl Into<String>,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        Rule::QuoteAlternator {
            from: from.into(),
            open: open.into(),
            close: close.into(),
        }
    }

    /// The literal text this rule matches.
    pub fn trigger(&self) -> &str {
        match self {
            Rule::Literal { from, .. }
            | Rule::ParagraphBoundary { from }
            | Rule::QuoteAlternator { from, .. } => from.as_str(),
        }
    }
}

/// Orders triggers lexically, except that a longer trigger sorts before
/// any of its own prefixes.
pub fn trigger_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return x.cmp(&y);
        }
    }
    b.chars().count().cmp(&a.chars().count())
}

/// Immutable, ordered collection of substitution rules.
///
/// Rules are scanned in [`trigger_order`] at every input position and the
/// first rule whose trigger prefixes the remaining input wins, so among
/// rules sharing a prefix the longest trigger is always tried first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EscapeTable {
    rules: Vec<Rule>,
}

impl EscapeTable {
    /// Builds a table from rules. A rule with an already-seen trigger replaces
    /// the earlier one; rules with an empty trigger are ignored.
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self::default().with_rules(rules)
    }

    /// Extends this table with additional rules.
    pub fn with_rules(self, rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut merged = self.rules;
        for rule in rules {
            if rule.trigger().is_empty() {
                log::warn!("ignoring substitution rule with empty trigger");
                continue;
            }
            match merged.iter_mut().find(|r| r.trigger() == rule.trigger()) {
                Some(existing) => *existing = rule,
                None => merged.push(rule),
            }
        }
        merged.sort_by(|a, b| trigger_order(a.trigger(), b.trigger()));
        Self { rules: merged }
    }

    /// Default table for HTML output.
    pub fn html() -> Self {
        Self::new([
            Rule::paragraph_boundary("\n"),
            Rule::paragraph_boundary("\r\n"),
            Rule::literal("&", "&amp;"),
            Rule::literal("'", "&apos;"),
            Rule::literal("<", "&lt;"),
            Rule::literal(">", "&gt;"),
            Rule::literal("\u{2018}", "&lsquo;"),
            Rule::literal("\u{2019}", "&rsquo;"),
            Rule::literal("\u{201c}", "<q>"),
            Rule::literal("\u{201d}", "</q>"),
            Rule::literal("\u{2013}", "&#x2013;"),
            Rule::literal("\u{2014}", "&#x2014;"),
            Rule::literal("\u{2022}", "&bull;"),
            Rule::quote_alternator("\"", "<q>", "</q>"),
        ])
    }

    /// Table for text inside Markdown table cells.
    pub fn markdown() -> Self {
        Self::new([
            Rule::paragraph_boundary("\n"),
            Rule::paragraph_boundary("\r\n"),
            Rule::literal("|", "\\|"),
        ])
    }

    /// Finds the first rule, in table order, whose trigger prefixes `rest`.
    pub fn find(&self, rest: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rest.starts_with(rule.trigger()))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

pub fn escape_html_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn escape_markdown_link_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' | '[' | ']' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn escape_markdown_link_destination(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' | '(' | ')' | ' ' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}
