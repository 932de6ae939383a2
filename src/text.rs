//! Text formatting utilities.

/// Converts text to title case, capitalizing the first character of each
/// word and lower-casing the rest. Words shorter than two characters are
/// left unchanged.
pub fn to_title_case(text: &str) -> String {
    text.split(char::is_whitespace)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) if !chars.as_str().is_empty() => {
                    let mut titled: String = first.to_uppercase().collect();
                    titled.push_str(&chars.as_str().to_lowercase());
                    titled
                }
                _ => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
