//! Contract checks for the reqres.in mock REST API.
//!
//! A [`ReqresClient`] performs one blocking call per request and hands back
//! the status code and JSON body. [`Contract`]s describe what the service
//! documents for each request, and [`cases`] strings the two together into
//! independent test cases.

pub mod cases;
mod client;
mod configuration;
mod contract;
mod data;
mod error;
pub mod expectations;
mod http_client;
mod logging;
pub mod mutations;
pub mod resources;
mod test_session;
#[cfg(test)]
mod testing;

pub use client::{ReqresClient, ReqresClientBuilder};
pub use configuration::{ContractConfiguration, DEFAULT_DOMAIN_NAME};
pub use contract::{Contract, ContractViolation};
pub use data::{Endpoint, Method, RequestBody, RequestData, ResponseData};
pub use error::Error;
pub use http_client::{HttpClient, ReqwestHttpClient};
pub use logging::init_test_logging;
pub use reqres_contract_codegen::contract_test;
pub use test_session::{SessionGuard, TestSession};
