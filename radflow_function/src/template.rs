// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! Double-brace command templates.
//!
//! A template is plain shell text with `{{name}}` substitution points, e.g.
//!
//! ```text
//! honeybee-radiance dcglare two-phase dc_direct.mtx --glare-limit {{glare_limit}}
//! ```
//!
//! Substitution is literal: the engine replaces each placeholder with the
//! text the caller provides and touches nothing else, in particular any
//! quoting present in the template.

static PLACEHOLDER: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();

fn placeholder_regex() -> &'static regex::Regex {
    PLACEHOLDER.get_or_init(|| regex::Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap())
}

/// Whether the text contains a `{{name}}` substitution point.
pub fn contains_placeholder(text: &str) -> bool {
    placeholder_regex().is_match(text)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A command template parsed into literal and placeholder segments.
///
/// Parsing happens once, at descriptor construction, so that rendering is a
/// straight concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(raw: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;
        for captures in placeholder_regex().captures_iter(raw) {
            let whole = captures.get(0).unwrap();
            if whole.start() > last {
                segments.push(Segment::Literal(raw[last..whole.start()].to_string()));
            }
            segments.push(Segment::Placeholder(captures[1].to_string()));
            last = whole.end();
        }
        if last < raw.len() {
            segments.push(Segment::Literal(raw[last..].to_string()));
        }
        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in order of first appearance, without duplicates.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut names = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if seen.insert(name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    /// Substitute every placeholder with the text returned by the lookup.
    pub fn render<E>(&self, mut lookup: impl FnMut(&str) -> Result<String, E>) -> Result<String, E> {
        let mut rendered = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(name) => rendered.push_str(&lookup(name)?),
            }
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn substitute(template: &str, pairs: &[(&str, &str)]) -> String {
        Template::parse(template)
            .render(|name| {
                pairs
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, text)| text.to_string())
                    .ok_or_else(|| format!("unknown placeholder '{}'", name))
            })
            .unwrap()
    }

    #[test]
    fn literal_templates_pass_through() {
        let template = Template::parse("honeybee-radiance translate model-to-rad-folder model.hbjson");
        assert!(template.placeholders().is_empty());
        assert_eq!(
            template.render(|_| Err("no placeholders expected".to_string())).unwrap(),
            "honeybee-radiance translate model-to-rad-folder model.hbjson"
        );
    }

    #[test]
    fn placeholders_are_substituted_in_place() {
        let rendered = substitute(
            "rmtxop --conversion \"{{conversion}}\" --name {{name}}",
            &[("conversion", "47.4 119.9 11.6"), ("name", "output")],
        );
        assert_eq!(rendered, "rmtxop --conversion \"47.4 119.9 11.6\" --name output");
    }

    #[test]
    fn repeated_placeholders_are_reported_once() {
        let template = Template::parse("cmd {{grid}} --check {{grid}} --view {{view}}");
        assert_eq!(template.placeholders(), vec!["grid", "view"]);
    }

    #[test]
    fn whitespace_inside_braces_is_tolerated() {
        let rendered = substitute("cmd --limit {{ limit }}", &[("limit", "0.4")]);
        assert_eq!(rendered, "cmd --limit 0.4");
    }

    #[test]
    fn lookup_failures_propagate() {
        let result = Template::parse("cmd {{missing}}").render(|name| Err::<String, _>(name.to_string()));
        assert_eq!(result.unwrap_err(), "missing");
    }

    #[test]
    fn single_braces_are_not_placeholders() {
        assert!(!contains_placeholder("awk '{print $1}'"));
        assert!(contains_placeholder("cmd {{x}}"));
    }
}
