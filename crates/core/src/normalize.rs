//! Accent- and case-insensitive name normalization.
//!
//! Product names are compared after lower-casing, canonical decomposition
//! (NFD), and removal of the combining diacritical marks block
//! (U+0300..=U+036F), so `"Lácteos"` and `"LACTEOS"` both become `"lacteos"`.

use unicode_normalization::UnicodeNormalization;

/// The Unicode "Combining Diacritical Marks" block.
const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Normalize a name for containment comparisons.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_DIACRITICS.contains(c))
        .collect()
}

/// Whether two already-normalized names match by containment in either
/// direction.
///
/// This is a heuristic: an empty name is contained in everything, and short
/// names such as `"leche"` match every longer name that includes them.
pub fn names_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_accents() {
        assert_eq!(normalize("Lácteos"), "lacteos");
        assert_eq!(normalize("CAFÉ COLOMBIANO"), "cafe colombiano");
        assert_eq!(normalize("Atún en Aceite"), "atun en aceite");
        assert_eq!(normalize("Miel de Maple (Canadá)"), "miel de maple (canada)");
        assert_eq!(normalize("Pingüino Ñandú"), "pinguino nandu");
    }

    #[test]
    fn decomposed_and_precomposed_input_agree() {
        // "é" as U+00E9 vs "e" + U+0301.
        assert_eq!(normalize("caf\u{00E9}"), normalize("cafe\u{0301}"));
    }

    #[test]
    fn keeps_marks_outside_the_diacritics_block() {
        // Hiragana voiced mark (U+3099) is not in the stripped range.
        let s = "\u{304B}\u{3099}";
        assert_eq!(normalize(s).chars().count(), 2);
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "",
            "   ",
            "Leche Entera Pasteurizada 1L",
            "Galletas Danesas de Mantequilla 454g (Dinamarca)",
            "Salsa de Soya 1L (Japón)",
            "\u{0130}stanbul",
            "ÀÉÎÕÜ àéîõü Çç Ññ",
            "ǅungla",
            "ﬁlete",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn overlap_is_symmetric_containment() {
        assert!(names_overlap("leche entera pasteurizada 1l", "leche"));
        assert!(names_overlap("leche", "leche entera pasteurizada 1l"));
        assert!(names_overlap("queso seco 500g", "queso seco 500g"));
        assert!(!names_overlap("queso seco 500g", "leche entera"));
    }

    #[test]
    fn empty_name_overlaps_everything() {
        assert!(names_overlap("queso seco 500g", ""));
        assert!(names_overlap("", "queso seco 500g"));
    }
}
