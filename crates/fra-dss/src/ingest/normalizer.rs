/// Strip byte-order marks and zero-width spaces, then trim.
pub(crate) fn clean_text(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}

/// Header names compare case-insensitively with `_`, `-` and spaces ignored, so
/// `groundwaterIndex`, `groundwater_index` and `Groundwater Index` all match.
pub(crate) fn header_key(value: &str) -> String {
    clean_text(value)
        .chars()
        .filter(|ch| !matches!(ch, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_removes_invisible_characters() {
        assert_eq!(clean_text("\u{feff} V-01\u{200b} "), "V-01");
    }

    #[test]
    fn header_key_folds_spelling_variants() {
        assert_eq!(header_key("groundwaterIndex"), "groundwaterindex");
        assert_eq!(header_key("groundwater_index"), "groundwaterindex");
        assert_eq!(header_key("\u{feff}Groundwater Index"), "groundwaterindex");
    }
}
