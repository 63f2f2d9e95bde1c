use crate::{
    expectations::{BodyExpectation, ExpectationsBuilder, Violation},
    ResponseData,
};
use serde_json::Value;
use thiserror::Error;

/// Expected status code plus body expectations for one documented request.
#[derive(Debug)]
pub struct Contract {
    status_code: u16,
    expectations: Vec<Box<dyn BodyExpectation + Send + Sync>>,
}

#[derive(Debug, Error)]
pub enum ContractViolation {
    #[error("expected status {expected}, got {actual} with body {body}")]
    Status {
        expected: u16,
        actual: u16,
        body: Value,
    },
    #[error("{violation} (status {status_code}, body {body})")]
    Body {
        violation: Violation,
        status_code: u16,
        body: Value,
    },
}

impl Contract {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            expectations: Vec::new(),
        }
    }

    pub fn expect<F: FnOnce(&mut ExpectationsBuilder) -> &mut ExpectationsBuilder>(
        mut self,
        func: F,
    ) -> Self {
        let mut expectations = ExpectationsBuilder::new();
        let _ = func(&mut expectations);
        self.expectations.extend(expectations.into_expectations());
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Checks the status first, then each body expectation in the order it was added.
    pub fn verify(&self, response: &ResponseData) -> Result<(), ContractViolation> {
        if response.status_code != self.status_code {
            return Err(ContractViolation::Status {
                expected: self.status_code,
                actual: response.status_code,
                body: Value::Object(response.body.clone()),
            });
        }

        for expectation in &self.expectations {
            expectation
                .check(&response.body)
                .map_err(|violation| ContractViolation::Body {
                    violation,
                    status_code: response.status_code,
                    body: Value::Object(response.body.clone()),
                })?;
        }

        Ok(())
    }
}
