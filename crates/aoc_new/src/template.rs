//! Minimal string templates with `{{name}}` placeholders.

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;
use thiserror::Error;

lazy_static! {
    pub static ref TEMPLATE_REGEX: Regex =
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*}}").expect("bad regex");
}

/// Error produced when parsing or rendering a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `{{` that does not start a valid placeholder
    #[error("malformed placeholder at byte {offset}")]
    Malformed {
        /// Byte offset of the `{{`.
        offset: usize,
    },
    /// Placeholder with no value
    #[error("no value for parameter `{0}`")]
    UnknownParameter(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    Literal(String),
    Param { name: String },
}
impl From<&str> for TemplateSegment {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

/// Parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parses a template, splitting it into literal text and placeholders.
    pub fn parse(src: &str) -> Result<Self, TemplateError> {
        let mut segments = vec![];
        let mut last_index = 0;
        for captures in TEMPLATE_REGEX.captures_iter(src) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            push_literal(&mut segments, src, last_index, whole.start())?;
            segments.push(TemplateSegment::Param {
                name: name.as_str().to_owned(),
            });
            last_index = whole.end();
        }
        push_literal(&mut segments, src, last_index, src.len())?;
        Ok(Self { segments })
    }

    /// Returns the names of all parameters used by the template.
    pub fn params(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                TemplateSegment::Literal(_) => None,
                TemplateSegment::Param { name } => Some(name.as_str()),
            })
            .collect()
    }

    /// Substitutes a value for every placeholder.
    pub fn render(&self, values: &BTreeMap<&str, String>) -> Result<String, TemplateError> {
        let mut ret = String::new();
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(s) => ret.push_str(s),
                TemplateSegment::Param { name } => match values.get(name.as_str()) {
                    Some(value) => ret.push_str(value),
                    None => return Err(TemplateError::UnknownParameter(name.clone())),
                },
            }
        }

        let params = self.params();
        for unused in values.keys().filter(|key| !params.contains(*key)) {
            log::debug!("unused template parameter `{unused}`");
        }

        Ok(ret)
    }
}

fn push_literal(
    segments: &mut Vec<TemplateSegment>,
    src: &str,
    start: usize,
    end: usize,
) -> Result<(), TemplateError> {
    let s = &src[start..end];
    if let Some(i) = s.find("{{") {
        return Err(TemplateError::Malformed { offset: start + i });
    }
    if !s.is_empty() {
        segments.push(s.into());
    }
    Ok(())
}
