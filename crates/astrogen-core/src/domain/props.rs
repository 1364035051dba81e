//! Parser for compact prop specifications.
//!
//! The grammar is a comma-separated list of `name:type` or `name?:type`
//! pairs, where `type` is TypeScript-like text that may itself contain
//! commas, colons, generics, object literals and quoted string unions:
//!
//! ```text
//! title:string, tags?:Array<string>, settings:{theme:"light"|"dark";size:number}
//! ```
//!
//! The scanner tracks one depth counter per bracket pair (`()`, `[]`, `{}`,
//! `<>`) and a quote flag. Only a comma at depth zero outside quotes ends a
//! prop, and only the first colon at depth zero separates name from type.
//! Type text is kept verbatim apart from trimming.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// One declared prop of a generated component or page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDefinition {
    pub name: String,
    /// Raw type text, not interpreted further.
    #[serde(rename = "type")]
    pub ty: String,
    pub optional: bool,
}

impl PropDefinition {
    /// Render as a TypeScript interface member (`name?: type;`).
    pub fn to_interface_member(&self) -> String {
        let marker = if self.optional { "?" } else { "" };
        format!("{}{}: {};", self.name, marker, self.ty)
    }
}

/// Ordered list of props; order is declaration and destructuring order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropsInterface(Vec<PropDefinition>);

impl PropsInterface {
    pub fn new(props: Vec<PropDefinition>) -> Self {
        Self(props)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropDefinition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<PropDefinition> {
        self.0
    }
}

impl<'a> IntoIterator for &'a PropsInterface {
    type Item = &'a PropDefinition;
    type IntoIter = std::slice::Iter<'a, PropDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Bracket nesting and quote state of the scanner.
#[derive(Debug, Default)]
struct ScanState {
    parens: u32,
    squares: u32,
    braces: u32,
    angles: u32,
    quote: Option<char>,
}

impl ScanState {
    fn at_top_level(&self) -> bool {
        self.quote.is_none()
            && self.parens == 0
            && self.squares == 0
            && self.braces == 0
            && self.angles == 0
    }

    /// Advance over one character. `prev` is needed so the `>` of an arrow
    /// (`=>`) is not read as a closing angle bracket.
    fn advance(&mut self, c: char, prev: Option<char>) {
        if let Some(q) = self.quote {
            if c == q && prev != Some('\\') {
                self.quote = None;
            }
            return;
        }

        match c {
            '"' | '\'' => self.quote = Some(c),
            '(' => self.parens += 1,
            ')' => self.parens = self.parens.saturating_sub(1),
            '[' => self.squares += 1,
            ']' => self.squares = self.squares.saturating_sub(1),
            '{' => self.braces += 1,
            '}' => self.braces = self.braces.saturating_sub(1),
            '<' => self.angles += 1,
            '>' if prev != Some('=') => self.angles = self.angles.saturating_sub(1),
            _ => {}
        }
    }
}

/// Split at every top-level occurrence of `delimiter`, at most `limit`
/// times (`None` for unlimited).
fn split_top_level(input: &str, delimiter: char, limit: Option<usize>) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut state = ScanState::default();
    let mut start = 0;
    let mut prev = None;

    for (i, c) in input.char_indices() {
        let reached_limit = limit.is_some_and(|n| parts.len() >= n);
        if c == delimiter && state.at_top_level() && !reached_limit {
            parts.push(&input[start..i]);
            start = i + c.len_utf8();
        } else {
            state.advance(c, prev);
        }
        prev = Some(c);
    }

    parts.push(&input[start..]);
    parts
}

/// Parse a prop specification into ordered prop definitions.
///
/// An empty or whitespace-only specification yields no props. Empty
/// segments between commas (such as a trailing comma) are skipped.
///
/// # Errors
///
/// Returns [`DomainError::InvalidProps`] echoing the offending segment when
/// a segment has no top-level colon, an empty name, or an empty type.
///
/// ```
/// use astrogen_core::domain::props::parse_props_string;
///
/// let props = parse_props_string("data:Array<{id:string;title:string}>,cb?:(x:T)=>void").unwrap();
/// assert_eq!(props.len(), 2);
/// assert_eq!(props[1].ty, "(x:T)=>void");
/// assert!(props[1].optional);
/// ```
pub fn parse_props_string(spec: &str) -> Result<Vec<PropDefinition>, DomainError> {
    split_top_level(spec, ',', None)
        .into_iter()
        .filter(|segment| !segment.trim().is_empty())
        .map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> Result<PropDefinition, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProps {
        segment: segment.trim().to_string(),
        reason: reason.to_string(),
    };

    let pieces = split_top_level(segment, ':', Some(1));
    let [raw_name, raw_type] = pieces.as_slice() else {
        return Err(invalid("expected name:type"));
    };

    let raw_name = raw_name.trim();
    let (name, name_optional) = match raw_name.strip_suffix('?') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (raw_name, false),
    };

    if name.is_empty() {
        return Err(invalid("prop name is empty"));
    }

    // `settings:{...}?` marks the prop optional too. Quoted text and
    // bracketed types never end in a bare `?`.
    let raw_type = raw_type.trim();
    let (ty, type_optional) = match raw_type.strip_suffix('?') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (raw_type, false),
    };
    let optional = name_optional || type_optional;

    if ty.is_empty() {
        return Err(invalid("prop type is empty"));
    }

    Ok(PropDefinition {
        name: name.to_string(),
        ty: ty.to_string(),
        optional,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(name: &str, ty: &str, optional: bool) -> PropDefinition {
        PropDefinition {
            name: name.into(),
            ty: ty.into(),
            optional,
        }
    }

    #[test]
    fn parses_simple_props_in_order() {
        let props = parse_props_string("name:string,age:number,isActive:boolean").unwrap();
        assert_eq!(
            props,
            vec![
                prop("name", "string", false),
                prop("age", "number", false),
                prop("isActive", "boolean", false),
            ]
        );
    }

    #[test]
    fn trailing_question_mark_on_type_marks_optional() {
        let props =
            parse_props_string(r#"settings:{theme:"light"|"dark";notifications:boolean}?"#)
                .unwrap();
        assert_eq!(
            props,
            vec![prop(
                "settings",
                r#"{theme:"light"|"dark";notifications:boolean}"#,
                true
            )]
        );
        assert_eq!(
            props[0].to_interface_member(),
            r#"settings?: {theme:"light"|"dark";notifications:boolean};"#
        );
    }

    #[test]
    fn lone_question_mark_is_not_a_type() {
        assert!(parse_props_string("flag:?").is_err());
    }

    #[test]
    fn nested_generics_objects_and_callbacks() {
        let props =
            parse_props_string("data:Array<{id:string;title:string}>,cb?:(x:T)=>void").unwrap();
        assert_eq!(
            props,
            vec![
                prop("data", "Array<{id:string;title:string}>", false),
                prop("cb", "(x:T)=>void", true),
            ]
        );
    }

    #[test]
    fn commas_inside_generics_do_not_split() {
        let props = parse_props_string("lookup:Record<string, number>, pair:[string, number]")
            .unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].ty, "Record<string, number>");
        assert_eq!(props[1].ty, "[string, number]");
    }

    #[test]
    fn quoted_unions_keep_their_contents() {
        let props =
            parse_props_string(r#"settings:{theme:"light"|"dark";notifications:boolean}"#)
                .unwrap();
        assert_eq!(
            props,
            vec![prop(
                "settings",
                r#"{theme:"light"|"dark";notifications:boolean}"#,
                false
            )]
        );

        let props = parse_props_string("label:'a,b'|'c:d', size:number").unwrap();
        assert_eq!(props[0].ty, "'a,b'|'c:d'");
        assert_eq!(props[1].name, "size");
    }

    #[test]
    fn whitespace_is_trimmed_but_type_text_is_verbatim() {
        let props = parse_props_string("  title ? :  Map< string ,  number >  ").unwrap();
        assert_eq!(props, vec![prop("title", "Map< string ,  number >", true)]);
    }

    #[test]
    fn double_colon_type_is_accepted_literally() {
        let props = parse_props_string("name:::").unwrap();
        assert_eq!(props, vec![prop("name", "::", false)]);
    }

    #[test]
    fn empty_spec_and_trailing_commas() {
        assert!(parse_props_string("").unwrap().is_empty());
        assert!(parse_props_string("   ").unwrap().is_empty());
        assert_eq!(parse_props_string("a:string,").unwrap().len(), 1);
    }

    #[test]
    fn missing_type_is_an_error() {
        let err = parse_props_string("name:").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidProps { ref segment, .. } if segment == "name:"
        ));
    }

    #[test]
    fn missing_name_is_an_error() {
        assert!(parse_props_string(":string").is_err());
        assert!(parse_props_string("?:string").is_err());
    }

    #[test]
    fn bare_token_is_an_error() {
        let err = parse_props_string("title:string, orphan").unwrap_err();
        match err {
            DomainError::InvalidProps { segment, .. } => assert_eq!(segment, "orphan"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn colon_only_inside_brackets_is_not_a_separator() {
        assert!(parse_props_string("{a:string}").is_err());
    }

    #[test]
    fn interface_member_rendering() {
        assert_eq!(
            prop("cb", "() => void", true).to_interface_member(),
            "cb?: () => void;"
        );
    }
}
