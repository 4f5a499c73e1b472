//! Transformation Rules
//!
//! Pure string functions the built-in styles are composed from.

/// Return the part of a qualified name after the last `.`
///
/// # Examples
/// ```
/// use display_name_mcp::naming::rules::simple_name_of;
///
/// assert_eq!(simple_name_of("com.example.CalculatorTests"), "CalculatorTests");
/// assert_eq!(simple_name_of("CalculatorTests"), "CalculatorTests");
/// ```
pub fn simple_name_of(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(index) => &qualified_name[index + 1..],
        None => qualified_name,
    }
}

/// Replace every `_` with a single space
///
/// Adjacent spaces are kept and nothing is trimmed.
pub fn replace_underscores_with_spaces(name: &str) -> String {
    name.replace('_', " ")
}

/// Insert a space at every camel-case boundary of `name`
///
/// A boundary sits before character `i` when any of these hold:
/// 1. `i-1` and `i` are uppercase and `i+1` is lowercase (`ABCd` -> `AB Cd`)
/// 2. `i-1` is not uppercase and `i` is uppercase (`fooBar` -> `foo Bar`)
/// 3. `i-1` is a letter and `i` is not (`foo2` -> `foo 2`)
///
/// Letters are ASCII letters. All conditions look at the original input, and
/// a position gets at most one space no matter how many of them match.
///
/// # Examples
/// ```
/// use display_name_mcp::naming::rules::split_camel_case_boundaries;
///
/// assert_eq!(split_camel_case_boundaries("fooBar"), "foo Bar");
/// assert_eq!(split_camel_case_boundaries("ABCdef"), "AB Cdef");
/// assert_eq!(split_camel_case_boundaries("foo2"), "foo 2");
/// ```
pub fn split_camel_case_boundaries(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + chars.len() / 2);

    for (i, &current) in chars.iter().enumerate() {
        if i > 0 && is_boundary(chars[i - 1], current, chars.get(i + 1).copied()) {
            result.push(' ');
        }
        result.push(current);
    }

    result
}

fn is_boundary(previous: char, current: char, next: Option<char>) -> bool {
    let acronym_to_word = previous.is_ascii_uppercase()
        && current.is_ascii_uppercase()
        && next.is_some_and(|c| c.is_ascii_lowercase());
    let lower_to_upper = !previous.is_ascii_uppercase() && current.is_ascii_uppercase();
    let letter_to_other = previous.is_ascii_alphabetic() && !current.is_ascii_alphabetic();

    acronym_to_word || lower_to_upper || letter_to_other
}
