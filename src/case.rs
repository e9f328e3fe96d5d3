use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENT_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// True when `name` is a single lexical identifier token. Names arriving
/// over the host boundary are not guaranteed to be well-formed.
pub fn is_plain_identifier(name: &str) -> bool {
    IDENT_RE.is_match(name)
}

/// Converts arbitrary identifier text to camelCase.
///
/// Word boundaries are the separators `-`, `_` and space, plus ASCII
/// case transitions (a lower-case letter or digit followed by an
/// upper-case letter, and the end of an upper-case run that precedes a
/// lower-case letter). The first word is fully lower-cased; every
/// following word is lower-cased with its first character upper-cased,
/// and words are concatenated with no separator.
///
/// Idempotent: camelCase input is a fixed point. Only ASCII letters are
/// case-folded; non-ASCII characters pass through unchanged.
pub fn to_camel_case(text: &str) -> String {
    // Consecutive single-letter words ("a_B_c") emit an upper-case run
    // that re-splits as one word, so iterate until the output is its
    // own fixed point. Each pass only merges words, so this converges.
    let mut out = camel_case_once(text);
    loop {
        let again = camel_case_once(&out);
        if again == out {
            return out;
        }
        out = again;
    }
}

fn camel_case_once(text: &str) -> String {
    let mut words: Vec<&str> = Vec::new();
    for chunk in text.split(['-', '_', ' ']) {
        split_case_boundaries(chunk, &mut words);
    }

    let mut out = String::with_capacity(text.len());
    for word in words {
        if out.is_empty() {
            for c in word.chars() {
                out.push(c.to_ascii_lowercase());
            }
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
            }
            for c in chars {
                out.push(c.to_ascii_lowercase());
            }
        }
    }
    out
}

fn split_case_boundaries<'a>(chunk: &'a str, words: &mut Vec<&'a str>) {
    let bytes = chunk.as_bytes();
    let mut start = 0;
    for i in 1..bytes.len() {
        let prev = bytes[i - 1];
        let cur = bytes[i];
        // lower/digit -> upper starts a new word; so does the last
        // letter of an upper-case run when the next letter is lower.
        let boundary = (cur.is_ascii_uppercase()
            && (prev.is_ascii_lowercase() || prev.is_ascii_digit()))
            || (cur.is_ascii_uppercase()
                && prev.is_ascii_uppercase()
                && bytes.get(i + 1).is_some_and(|n| n.is_ascii_lowercase()));
        if boundary {
            words.push(&chunk[start..i]);
            start = i;
        }
    }
    if start < bytes.len() {
        words.push(&chunk[start..]);
    }
}

/// The shared rename guard: `Some(new)` iff `name` is a plain
/// identifier whose camelCase form is non-empty and differs from the
/// current text. `None` means "leave the node alone".
pub fn rename_target(name: &str) -> Option<String> {
    if !is_plain_identifier(name) {
        return None;
    }
    let normalized = to_camel_case(name);
    if normalized.is_empty() || normalized == name {
        return None;
    }
    Some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_words_are_camel_cased() {
        assert_eq!(to_camel_case("TEST_PUBLIC_FUNCTION"), "testPublicFunction");
        assert_eq!(
            to_camel_case("test_public_function_three"),
            "testPublicFunctionThree"
        );
        assert_eq!(to_camel_case("fourth_property"), "fourthProperty");
        assert_eq!(to_camel_case("kebab-cased-name"), "kebabCasedName");
        assert_eq!(to_camel_case("spaced out name"), "spacedOutName");
    }

    #[test]
    fn test_mixed_case_words() {
        assert_eq!(to_camel_case("SECOND_Property"), "secondProperty");
        assert_eq!(to_camel_case("third_PROPERTY"), "thirdProperty");
        assert_eq!(to_camel_case("TEST_public_FUNCTION_two"), "testPublicFunctionTwo");
    }

    #[test]
    fn test_camel_case_is_fixed_point() {
        assert_eq!(to_camel_case("testPublicFunction"), "testPublicFunction");
        assert_eq!(to_camel_case("x"), "x");
        assert_eq!(to_camel_case("method2Name"), "method2Name");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "",
            "TEST_PUBLIC_FUNCTION",
            "ALLUPPER",
            "mixed-sep_and space",
            "alreadyCamelCase",
            "__construct",
            "ABCDef",
            "_leading_underscore",
            "trailing_",
            "a_B_c",
            "x_Y",
            "a-B-c d_E",
        ];
        for input in inputs {
            let once = to_camel_case(input);
            assert_eq!(to_camel_case(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_single_letter_words_settle() {
        // The merged upper-case run must come out already canonical:
        // a second pass may not see a different word sequence.
        assert_eq!(to_camel_case("a_B_c"), "aBc");
        assert_eq!(to_camel_case(&to_camel_case("a_B_c")), "aBc");
        assert_eq!(rename_target(&to_camel_case("a_B_c")), None);
        assert_eq!(rename_target(&to_camel_case("x_Y_z_W")), None);
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("___"), "");
        assert_eq!(to_camel_case("a__b"), "aB");
    }

    #[test]
    fn test_acronym_runs() {
        assert_eq!(to_camel_case("ABCDef"), "abcDef");
        assert_eq!(to_camel_case("parseHTMLDocument"), "parseHtmlDocument");
    }

    #[test]
    fn test_rename_target_guard() {
        assert_eq!(
            rename_target("TEST_PUBLIC_FUNCTION").as_deref(),
            Some("testPublicFunction")
        );
        // Already canonical: no-op.
        assert_eq!(rename_target("testPublicFunction"), None);
        // Normalizes to empty: no-op.
        assert_eq!(rename_target("_"), None);
        // Not a lexical identifier: no-op.
        assert_eq!(rename_target("not a token!"), None);
        assert_eq!(rename_target(""), None);
    }
}
