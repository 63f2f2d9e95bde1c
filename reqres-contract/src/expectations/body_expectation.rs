use super::{BodyExpectation, Violation};
use serde_json::{Map, Value};

/// The whole body must equal the expected object.
#[derive(Debug)]
pub struct BodyEquals {
    expected: Value,
}

impl BodyEquals {
    pub fn new(expected: Value) -> Self {
        Self { expected }
    }
}

impl BodyExpectation for BodyEquals {
    fn check(&self, body: &Map<String, Value>) -> Result<(), Violation> {
        let actual = Value::Object(body.clone());

        if actual == self.expected {
            Ok(())
        } else {
            Err(Violation::BodyMismatch {
                expected: self.expected.clone(),
                actual,
            })
        }
    }
}

/// The body must contain exactly these keys, in this order.
#[derive(Debug)]
pub struct KeysInOrder {
    keys: Vec<String>,
}

impl KeysInOrder {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl BodyExpectation for KeysInOrder {
    fn check(&self, body: &Map<String, Value>) -> Result<(), Violation> {
        let actual = body.keys().cloned().collect::<Vec<_>>();

        if actual == self.keys {
            Ok(())
        } else {
            Err(Violation::KeyOrder {
                expected: self.keys.clone(),
                actual,
            })
        }
    }
}
