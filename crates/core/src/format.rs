//! Display helpers for document paths and comparison field names.

/// Final segment of a Windows-style path. Only `\` separates segments.
pub fn file_name_of(path: Option<&str>) -> &str {
    match path {
        Some(path) => path.rsplit('\\').next().unwrap_or(path),
        None => "",
    }
}

/// Turns a lowerCamelCase identifier into Title Case words.
///
/// Every ASCII capital starts a new word, so runs of capitals split into
/// single letters: `"tradeID"` becomes `"Trade I D"`.
pub fn format_field_name(name: Option<&str>) -> String {
    let Some(name) = name.filter(|name| !name.is_empty()) else {
        return String::new();
    };

    let mut spaced = String::with_capacity(name.len() * 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_of_missing_or_empty_is_empty() {
        assert_eq!(file_name_of(None), "");
        assert_eq!(file_name_of(Some("")), "");
    }

    #[test]
    fn file_name_of_takes_last_backslash_segment() {
        assert_eq!(file_name_of(Some("C:\\folder\\sub\\doc.txt")), "doc.txt");
        assert_eq!(file_name_of(Some("doc.txt")), "doc.txt");
        assert_eq!(file_name_of(Some("C:\\folder\\")), "");
    }

    #[test]
    fn file_name_of_ignores_forward_slashes() {
        assert_eq!(file_name_of(Some("/srv/deals/doc.txt")), "/srv/deals/doc.txt");
        assert_eq!(file_name_of(Some("C:\\deals/2024\\a1.pdf")), "a1.pdf");
    }

    #[test]
    fn format_field_name_title_cases_camel_case() {
        assert_eq!(format_field_name(Some("tradeDate")), "Trade Date");
        assert_eq!(format_field_name(Some("notional")), "Notional");
        assert_eq!(format_field_name(Some("settlementCurrencyCode")), "Settlement Currency Code");
    }

    #[test]
    fn format_field_name_empty_input() {
        assert_eq!(format_field_name(None), "");
        assert_eq!(format_field_name(Some("")), "");
    }

    #[test]
    fn format_field_name_splits_acronyms_letter_by_letter() {
        assert_eq!(format_field_name(Some("ABC")), "A B C");
        assert_eq!(format_field_name(Some("tradeID")), "Trade I D");
    }

    #[test]
    fn format_field_name_lowercases_word_tails() {
        assert_eq!(format_field_name(Some("already Spaced")), "Already Spaced");
        assert_eq!(format_field_name(Some("field1Name")), "Field1 Name");
        assert_eq!(format_field_name(Some("snake_CASE")), "Snake_ C A S E");
    }
}
