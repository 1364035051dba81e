//! Frontmatter emitters for YAML blocks and AsciiDoc attributes.

use std::collections::BTreeMap;

use astrogen_core::{application::ApplicationError, error::AstrogenResult};
use serde_json::Value;

/// Serialize a map as a YAML document body, without fences.
///
/// An empty map yields an empty string rather than `{}`.
pub fn yaml_document(fields: &BTreeMap<String, Value>) -> AstrogenResult<String> {
    if fields.is_empty() {
        return Ok(String::new());
    }
    serde_yaml::to_string(fields).map_err(|e| {
        ApplicationError::RenderingFailed {
            reason: format!("frontmatter is not serializable as YAML: {e}"),
        }
        .into()
    })
}

/// A YAML document wrapped in `---` fences.
pub fn yaml_frontmatter(fields: &BTreeMap<String, Value>) -> AstrogenResult<String> {
    Ok(format!("---\n{}---\n", yaml_document(fields)?))
}

/// Render a map as AsciiDoc document attributes (`:key: value`).
pub fn asciidoc_attributes(fields: &BTreeMap<String, Value>) -> String {
    fields
        .iter()
        .filter(|(key, _)| key.as_str() != "title")
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!(":{}: {}\n", key, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> BTreeMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    fn parse_fenced(out: &str) -> BTreeMap<String, Value> {
        let body = out
            .strip_prefix("---\n")
            .and_then(|rest| rest.strip_suffix("---\n"))
            .unwrap();
        serde_yaml::from_str(body).unwrap()
    }

    #[test]
    fn frontmatter_reads_back_unchanged() {
        let fields = map(json!({
            "title": "Hello World",
            "draft": false,
            "tags": ["astro", "rust"],
            "note": "key: value",
            "flag": "yes",
            "code": "0x1F",
            "ver": "0o17",
            "count": 3,
            "author": { "name": "Ada" },
        }));

        let out = yaml_frontmatter(&fields).unwrap();
        assert_eq!(parse_fenced(&out), fields);
    }

    #[test]
    fn numeric_looking_strings_stay_strings() {
        let out = yaml_document(&map(json!({ "code": "0x1F", "zip": "01234" }))).unwrap();
        let back: BTreeMap<String, Value> = serde_yaml::from_str(&out).unwrap();
        assert_eq!(back["code"], json!("0x1F"));
        assert_eq!(back["zip"], json!("01234"));
    }

    #[test]
    fn simple_fields_are_one_per_line() {
        let out = yaml_document(&map(json!({ "draft": true, "title": "Hello" }))).unwrap();
        assert_eq!(out, "draft: true\ntitle: Hello\n");
    }

    #[test]
    fn empty_map_gives_empty_fences() {
        assert_eq!(yaml_frontmatter(&BTreeMap::new()).unwrap(), "---\n---\n");
        assert_eq!(yaml_document(&BTreeMap::new()).unwrap(), "");
    }

    #[test]
    fn asciidoc_skips_title() {
        let out = asciidoc_attributes(&map(json!({ "title": "Intro", "pubDate": "2024-05-01" })));
        assert_eq!(out, ":pubDate: 2024-05-01\n");
    }
}
