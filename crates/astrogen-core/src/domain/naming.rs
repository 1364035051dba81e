//! Case conversion and file-name normalization.
//!
//! Words are found with three independent signals:
//!
//! - explicit separators (`-`, `_`, space)
//! - camel boundaries (lowercase or digit followed by uppercase)
//! - acronym boundaries (`XMLHttp` splits into `XML` and `Http`)
//!
//! Every conversion is idempotent.

/// Characters that may never appear in a generated file name.
const ILLEGAL_FILE_CHARS: &[char] = &[
    '<', '>', ':', '"', '/', '\\', '|', '?', '*', '!', '@', '#', '$', '%', '^', '&', '(', ')',
    '+', '=', '{', '}', '[', ']', ',', '`', '~',
];

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | ' ')
}

/// Split an identifier into its words.
///
/// ```
/// use astrogen_core::domain::naming::split_words;
///
/// assert_eq!(split_words("XMLHttpRequest"), ["XML", "Http", "Request"]);
/// assert_eq!(split_words("user_card-list"), ["user", "card", "list"]);
/// ```
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());

            let camel_boundary = prev.is_lowercase() || prev.is_ascii_digit();
            let acronym_boundary = prev.is_uppercase() && next_is_lower;

            if camel_boundary || acronym_boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Convert to PascalCase (e.g. `"my-component"` -> `"MyComponent"`).
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert to camelCase (e.g. `"my-component"` -> `"myComponent"`).
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert to kebab-case (e.g. `"MyComponent"` -> `"my-component"`).
pub fn to_kebab_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert to a human title (e.g. `"getting-started"` -> `"Getting Started"`).
pub fn to_title_case(s: &str) -> String {
    split_words(s)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Make a string safe to use as a file name.
///
/// Strips characters that are illegal in file names, turns whitespace into
/// `-`, collapses repeated `-` and trims separators from both ends. Case,
/// dots and underscores are preserved so multi-extension names such as
/// `robots.config.txt` and route-excluded names like `_draft` survive.
pub fn normalize_file_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        if ILLEGAL_FILE_CHARS.contains(&c) || c.is_control() {
            continue;
        }
        let c = if c.is_whitespace() { '-' } else { c };
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }

    out.trim_matches(|c| c == '-' || c == '.').to_string()
}
