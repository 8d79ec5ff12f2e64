use crate::domain::constants::{MASK_MARKER, SPECIAL_CHARS};
use crate::domain::models::MaskCounts;

/// Count how many characters of each class a mask would produce.
///
/// One left-to-right scan with one character of lookahead. A `?` followed
/// by any character is consumed whole as a placeholder token, so a marker
/// never doubles as the preceding character of the next match. Selectors:
/// `l`/`u`/`d`/`s` count one character of that class, `a` counts one in all
/// four classes at once, `??` is an escaped marker counting as special.
/// A literal character is classified by its own Unicode category.
pub fn classify(mask: &str) -> MaskCounts {
    let mut counts = MaskCounts::default();
    let mut chars = mask.chars();
    while let Some(c) = chars.next() {
        if c == MASK_MARKER {
            match chars.next() {
                Some('l') => counts.lower += 1,
                Some('u') => counts.upper += 1,
                Some('d') => counts.digit += 1,
                Some('s') => counts.special += 1,
                Some(MASK_MARKER) => counts.special += 1,
                Some('a') => {
                    counts.lower += 1;
                    counts.upper += 1;
                    counts.digit += 1;
                    counts.special += 1;
                }
                // unknown selector: token consumed whole, no class
                Some(_) => {}
                // trailing lone marker: unclassified literal
                None => {}
            }
        } else {
            classify_literal(c, &mut counts);
        }
    }
    // Length uses its own view of the string: every marker stripped, the
    // rest counted. A `?l` token produces one password character but zero
    // length characters here, while `??` leaves exactly one behind.
    counts.length = mask.chars().filter(|c| *c != MASK_MARKER).count();
    counts
}

fn classify_literal(c: char, counts: &mut MaskCounts) {
    if c.is_lowercase() {
        counts.lower += 1;
    } else if c.is_uppercase() {
        counts.upper += 1;
    } else if c.is_numeric() {
        counts.digit += 1;
    } else if SPECIAL_CHARS.contains(c) {
        counts.special += 1;
    }
}
