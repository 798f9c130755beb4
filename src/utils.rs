pub type IntentName = String;
pub type EntityCategory = String;

/// Makes an intent name usable as an identifier: dots and spaces become underscores.
pub fn normalize_intent_name(intent: &str) -> String {
    intent.replace('.', "_").replace(' ', "_")
}

/// Returns the substring covered by a UTF-16 code unit span, or `None` when the span does not
/// fall on character boundaries of `text`.
pub fn substring_with_utf16_span(text: &str, offset: usize, length: usize) -> Option<String> {
    let units: Vec<u16> = text.encode_utf16().collect();
    let end = offset.checked_add(length)?;
    if end > units.len() {
        return None;
    }
    String::from_utf16(&units[offset..end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_intent_name() {
        assert_eq!("Surface_QA", normalize_intent_name("Surface.QA"));
        assert_eq!("Book_a_flight", normalize_intent_name("Book a.flight"));
        assert_eq!("BookFlight", normalize_intent_name("BookFlight"));
    }

    #[test]
    fn test_substring_with_utf16_span() {
        // Given
        let text = "fly to Zürich 🛫 now";

        // When
        let city = substring_with_utf16_span(text, 7, 6);
        let emoji = substring_with_utf16_span(text, 14, 2);
        let split_surrogate = substring_with_utf16_span(text, 14, 1);
        let out_of_bounds = substring_with_utf16_span(text, 18, 10);

        // Then
        assert_eq!(Some("Zürich".to_string()), city);
        assert_eq!(Some("🛫".to_string()), emoji);
        assert_eq!(None, split_surrogate);
        assert_eq!(None, out_of_bounds);
    }
}
