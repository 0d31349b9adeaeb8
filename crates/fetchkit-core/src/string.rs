//! String cleanup helpers.

/// Collapses every whitespace run (spaces, tabs, newlines) into a single space
/// and trims the ends.
pub fn clean(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips ASCII commas, then converts ideographic commas (U+3001) into ASCII
/// commas, then trims. The order matters: ideographic commas survive as ASCII.
pub fn comma_clean(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != ',')
        .map(|c| if c == '、' { ',' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Joins values with `separator`.
pub fn join_with<S: AsRef<str>>(separator: &str, values: &[S]) -> String {
    values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<_>>()
        .join(separator)
}

/// True if the string contains any character from the Japanese-text ranges:
/// CJK punctuation, hiragana, katakana, full/half-width forms, the common CJK
/// ideograph block, plus the star/arrow/reference marks used in Japanese prose.
pub fn contains_japanese(value: &str) -> bool {
    value.chars().any(|c| {
        matches!(c,
            '\u{3000}'..='\u{303F}'
            | '\u{3040}'..='\u{309F}'
            | '\u{30A0}'..='\u{30FF}'
            | '\u{FF00}'..='\u{FFEF}'
            | '\u{4E00}'..='\u{9FAF}'
            | '\u{2605}'..='\u{2606}'
            | '\u{2190}'..='\u{2195}'
            | '\u{203B}'
        )
    })
}
