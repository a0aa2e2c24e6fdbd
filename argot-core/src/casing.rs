//! Capitalization-shape preservation
//!
//! When a rule rewrites a matched span, the replacement should keep the
//! capitalization shape the author of the input used, not the shape the
//! rule author happened to type.

/// Shape a replacement string after the capitalization of the matched span.
///
/// Three rules, checked in order:
/// 1. Original is entirely upper-case (with at least one cased character):
///    the whole replacement is upper-cased.
/// 2. Original starts with an upper-case character: only the replacement's
///    first character is upper-cased, the rest is left as supplied.
/// 3. Otherwise the replacement's first character is lower-cased and the
///    rest is left as supplied.
///
/// An empty original or replacement short-circuits to the replacement
/// unchanged.
///
/// ```
/// use argot_core::casing::match_case;
///
/// assert_eq!(match_case("Hello", "goodbye"), "Goodbye");
/// assert_eq!(match_case("HELLO", "goodbye"), "GOODBYE");
/// assert_eq!(match_case("hello", "Goodbye"), "goodbye");
/// ```
pub fn match_case(original: &str, replacement: &str) -> String {
    if original.is_empty() || replacement.is_empty() {
        return replacement.to_string();
    }

    if is_all_upper(original) {
        replacement.to_uppercase()
    } else if original.chars().next().is_some_and(char::is_uppercase) {
        recase_first(replacement, true)
    } else {
        recase_first(replacement, false)
    }
}

/// True when the string contains at least one cased character and no
/// lower-case ones.
fn is_all_upper(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

fn recase_first(s: &str, upper: bool) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            if upper {
                out.extend(first.to_uppercase());
            } else {
                out.extend(first.to_lowercase());
            }
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_original_lowers_replacement_head() {
        assert_eq!(match_case("hello", "goodbye"), "goodbye");
        assert_eq!(match_case("hello", "GoodBye"), "goodBye");
    }

    #[test]
    fn titled_original_titles_replacement() {
        assert_eq!(match_case("Hello", "goodbye"), "Goodbye");
        // Only the first character is touched
        assert_eq!(match_case("Hello", "goodBYE"), "GoodBYE");
    }

    #[test]
    fn shouting_original_shouts_replacement() {
        assert_eq!(match_case("HELLO", "goodbye"), "GOODBYE");
        // Digits are not cased, so "A1" still counts as all-upper
        assert_eq!(match_case("A1", "ok"), "OK");
    }

    #[test]
    fn uncased_original_falls_through_to_lower() {
        // No cased characters at all: rule 1 and 2 both fail
        assert_eq!(match_case("123", "Word"), "word");
    }

    #[test]
    fn empty_inputs_short_circuit() {
        assert_eq!(match_case("", "goodbye"), "goodbye");
        assert_eq!(match_case("Hello", ""), "");
    }
}
