mod body_expectation;
mod field_expectation;

pub use body_expectation::{BodyEquals, KeysInOrder};
pub use field_expectation::{FieldEquals, FieldIsEmptyArray, FieldMatches};

use crate::RequestBody;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt::Debug;
use thiserror::Error;

/// A single check over a parsed response body.
pub trait BodyExpectation: Debug {
    fn check(&self, body: &Map<String, Value>) -> Result<(), Violation>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("expected body {expected}, got {actual}")]
    BodyMismatch { expected: Value, actual: Value },
    #[error("expected keys {expected:?} in this order, got {actual:?}")]
    KeyOrder {
        expected: Vec<String>,
        actual: Vec<String>,
    },
    #[error("missing field {0:?}")]
    MissingField(String),
    #[error("field {field:?} is {actual}, expected {expected}")]
    FieldMismatch {
        field: String,
        expected: Value,
        actual: Value,
    },
    #[error("field {field:?} is {actual}, which does not match /{pattern}/")]
    PatternMismatch {
        field: String,
        pattern: String,
        actual: Value,
    },
    #[error("field {field:?} is {actual}, expected an empty array")]
    NotEmptyArray { field: String, actual: Value },
}

pub struct ExpectationsBuilder {
    expectations: Vec<Box<dyn BodyExpectation + Send + Sync>>,
}

impl ExpectationsBuilder {
    pub(crate) fn new() -> Self {
        Self {
            expectations: Vec::new(),
        }
    }

    pub fn body_equals(&mut self, expected: Value) -> &mut Self {
        self.add_expectation(BodyEquals::new(expected))
    }

    pub fn keys_in_order<S: Into<String>, I: IntoIterator<Item = S>>(
        &mut self,
        keys: I,
    ) -> &mut Self {
        self.add_expectation(KeysInOrder::new(keys))
    }

    pub fn field_equals<S: Into<String>, V: Into<Value>>(
        &mut self,
        field: S,
        value: V,
    ) -> &mut Self {
        self.add_expectation(FieldEquals::new(field, value))
    }

    /// Every submitted field must come back with the submitted value.
    pub fn fields_echo(&mut self, body: &RequestBody) -> &mut Self {
        for (field, value) in body.iter() {
            self.field_equals(field, value);
        }
        self
    }

    pub fn field_matches<S: Into<String>>(&mut self, field: S, pattern: Regex) -> &mut Self {
        self.add_expectation(FieldMatches::new(field, pattern))
    }

    pub fn field_is_empty_array<S: Into<String>>(&mut self, field: S) -> &mut Self {
        self.add_expectation(FieldIsEmptyArray::new(field))
    }

    pub fn add_expectation<E: BodyExpectation + Send + Sync + 'static>(
        &mut self,
        expectation: E,
    ) -> &mut Self {
        self.expectations.push(Box::new(expectation));
        self
    }

    pub fn into_expectations(self) -> Vec<Box<dyn BodyExpectation + Send + Sync>> {
        self.expectations
    }
}

impl Default for ExpectationsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn field<'a>(body: &'a Map<String, Value>, name: &str) -> Result<&'a Value, Violation> {
    body.get(name)
        .ok_or_else(|| Violation::MissingField(name.into()))
}
