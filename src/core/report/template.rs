use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::{Error, FilmcatResult};

// `{{ <body> }}`, body must not contain braces
static ACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*(?P<body>[^{}]*?)\s*\}\}").unwrap());

static FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.(?P<name>[A-Za-z_][A-Za-z0-9_]*)$").unwrap());

/// Values a template can substitute into its `{{ .Field }}` actions.
pub trait Fields {
    fn field(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(name: &str, source: &str) -> FilmcatResult<Self> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for caps in ACTION_RE.captures_iter(source) {
            let action = caps.get(0).unwrap();
            push_literal(name, &mut segments, &source[cursor..action.start()])?;

            let body = &caps["body"];
            let field = FIELD_RE.captures(body).ok_or_else(|| {
                Error::TemplateError(format!("{name}: unsupported action '{{{{ {body} }}}}'"))
            })?;
            segments.push(Segment::Field(field["name"].to_string()));

            cursor = action.end();
        }
        push_literal(name, &mut segments, &source[cursor..])?;

        Ok(Self {
            name: name.to_string(),
            segments,
        })
    }

    pub fn execute(&self, fields: &impl Fields) -> FilmcatResult<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => {
                    let value = fields.field(field).ok_or_else(|| {
                        Error::TemplateError(format!(
                            "{}: can't evaluate field {}",
                            self.name, field
                        ))
                    })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

fn push_literal(name: &str, segments: &mut Vec<Segment>, text: &str) -> FilmcatResult<()> {
    if let Some(pos) = text.find("{{") {
        return Err(Error::TemplateError(format!(
            "{name}: unclosed action near '{}'",
            text[pos..].lines().next().unwrap_or_default()
        )));
    }
    if !text.is_empty() {
        segments.push(Segment::Literal(text.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    impl Fields for HashMap<&str, &str> {
        fn field(&self, name: &str) -> Option<&str> {
            self.get(name).copied()
        }
    }

    #[test]
    fn substitutes_fields_with_or_without_spaces() {
        let t = Template::parse("t", "a {{ .One }} b {{.Two}}!").unwrap();
        let fields = HashMap::from([("One", "1"), ("Two", "2")]);
        assert_eq!(t.execute(&fields).unwrap(), "a 1 b 2!");
    }

    #[test]
    fn plain_text_passes_through() {
        let t = Template::parse("t", "\n  no actions here }}\n").unwrap();
        assert_eq!(t.execute(&HashMap::<&str, &str>::new()).unwrap(), "\n  no actions here }}\n");
    }

    #[test]
    fn unclosed_action_fails_to_parse() {
        let err = Template::parse("t", "head {{ .One ").unwrap_err();
        assert!(matches!(err, Error::TemplateError(_)));
    }

    #[test]
    fn non_field_action_fails_to_parse() {
        for source in ["{{ One }}", "{{ . }}", "{{ .One .Two }}", "{{ {x} }}"] {
            assert!(
                matches!(Template::parse("t", source), Err(Error::TemplateError(_))),
                "{source} should be rejected"
            );
        }
    }

    #[test]
    fn unknown_field_fails_to_execute() {
        let t = Template::parse("t", "{{ .Missing }}").unwrap();
        let err = t.execute(&HashMap::from([("Other", "x")])).unwrap_err();
        assert!(err.to_string().contains("Missing"));
    }
}
