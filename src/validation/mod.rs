//! Declarative field-level validation shared by every entity form.
//!
//! A schema is an allow-list: fields it does not name are never checked.
//! All schema fields are checked in one pass so the caller gets the full
//! error map, but within a single field the first violated rule wins.

pub mod schemas;

use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;

/// How a field's value is shaped. Bilingual is a declared kind, not a
/// runtime structural probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Bilingual,
}

type CustomRule = fn(&Value) -> Option<String>;

#[derive(Debug, Clone)]
pub struct FieldRule {
    kind: FieldKind,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
    custom: Option<CustomRule>,
}

impl FieldRule {
    pub fn text() -> Self {
        Self {
            kind: FieldKind::Text,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            custom: None,
        }
    }

    pub fn bilingual() -> Self {
        Self {
            kind: FieldKind::Bilingual,
            ..Self::text()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn pattern(mut self, regex: &Regex) -> Self {
        self.pattern = Some(regex.clone());
        self
    }

    pub fn custom(mut self, rule: CustomRule) -> Self {
        self.custom = Some(rule);
        self
    }

    /// First violated rule for this field, or None if the value passes.
    fn check(&self, value: Option<&Value>) -> Option<String> {
        let present = matches!(value, Some(v) if !v.is_null());

        match self.kind {
            FieldKind::Bilingual => {
                if self.required && !bilingual_complete(value) {
                    return Some("This field is required in both languages".to_string());
                }
            }
            FieldKind::Text => match value {
                Some(Value::String(s)) => {
                    if self.required && s.trim().is_empty() {
                        return Some("This field is required".to_string());
                    }
                }
                Some(v) if !v.is_null() => {
                    // Non-string values only pass fields with no string-shaped
                    // rules (e.g. numeric fields checked by a custom rule)
                    if self.required || self.has_string_rules() {
                        return Some("Must be a text value".to_string());
                    }
                }
                _ => {
                    if self.required {
                        return Some("This field is required".to_string());
                    }
                }
            },
        }

        // Length and format rules apply to plain string values only
        if let Some(Value::String(s)) = value {
            if let Some(min) = self.min_length {
                if s.chars().count() < min {
                    return Some(format!("Must be at least {} characters", min));
                }
            }
            if let Some(max) = self.max_length {
                if s.chars().count() > max {
                    return Some(format!("Must be at most {} characters", max));
                }
            }
            if let Some(pattern) = &self.pattern {
                if !pattern.is_match(s) {
                    return Some("Invalid format".to_string());
                }
            }
        }

        if present {
            if let Some(rule) = self.custom {
                if let Some(message) = rule(value?) {
                    return Some(message);
                }
            }
        }

        None
    }

    fn has_string_rules(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some() || self.pattern.is_some()
    }
}

fn bilingual_complete(value: Option<&Value>) -> bool {
    let Some(Value::Object(pair)) = value else {
        return false;
    };
    let filled = |key: &str| {
        matches!(pair.get(key), Some(Value::String(s)) if !s.trim().is_empty())
    };
    filled("en") && filled("ar")
}

/// Ordered field-name to rule mapping for one entity type.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(&'static str, FieldRule)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, rule: FieldRule) -> Self {
        self.fields.push((name, rule));
        self
    }

    /// Validate a payload. Empty map means valid.
    pub fn validate(&self, payload: &Value) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();
        let object = payload.as_object();

        for (name, rule) in &self.fields {
            let value = object.and_then(|o| o.get(*name));
            if let Some(message) = rule.check(value) {
                errors.insert((*name).to_string(), message);
            }
        }

        errors
    }
}
