use super::{field, BodyExpectation, Violation};
use regex::Regex;
use serde_json::{Map, Value};

#[derive(Debug)]
pub struct FieldEquals {
    field: String,
    expected: Value,
}

impl FieldEquals {
    pub fn new<S: Into<String>, V: Into<Value>>(field: S, expected: V) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

impl BodyExpectation for FieldEquals {
    fn check(&self, body: &Map<String, Value>) -> Result<(), Violation> {
        let actual = field(body, &self.field)?;

        if *actual == self.expected {
            Ok(())
        } else {
            Err(Violation::FieldMismatch {
                field: self.field.clone(),
                expected: self.expected.clone(),
                actual: actual.clone(),
            })
        }
    }
}

/// Strings are matched as-is, other values by their JSON text.
#[derive(Debug)]
pub struct FieldMatches {
    field: String,
    pattern: Regex,
}

impl FieldMatches {
    pub fn new<S: Into<String>>(field: S, pattern: Regex) -> Self {
        Self {
            field: field.into(),
            pattern,
        }
    }
}

impl BodyExpectation for FieldMatches {
    fn check(&self, body: &Map<String, Value>) -> Result<(), Violation> {
        let actual = field(body, &self.field)?;
        let is_match = match actual {
            Value::String(text) => self.pattern.is_match(text),
            other => self.pattern.is_match(&other.to_string()),
        };

        if is_match {
            Ok(())
        } else {
            Err(Violation::PatternMismatch {
                field: self.field.clone(),
                pattern: self.pattern.as_str().into(),
                actual: actual.clone(),
            })
        }
    }
}

#[derive(Debug)]
pub struct FieldIsEmptyArray {
    field: String,
}

impl FieldIsEmptyArray {
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl BodyExpectation for FieldIsEmptyArray {
    fn check(&self, body: &Map<String, Value>) -> Result<(), Violation> {
        match field(body, &self.field)? {
            Value::Array(items) if items.is_empty() => Ok(()),
            actual => Err(Violation::NotEmptyArray {
                field: self.field.clone(),
                actual: actual.clone(),
            }),
        }
    }
}
