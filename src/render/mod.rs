mod escape;
mod inline;

pub use escape::{
    escape_html_attr, escape_markdown_link_destination, escape_markdown_link_text, trigger_order,
    EscapeTable, Rule,
};
pub use inline::{InlineRenderer, ParagraphMode};
