use crate::{Contract, Endpoint};
use serde_json::json;

pub const REGISTER_PATH: &str = "/api/register";
pub const LOGIN_PATH: &str = "/api/login";

pub fn register() -> Endpoint {
    Endpoint::new(REGISTER_PATH)
}

pub fn login() -> Endpoint {
    Endpoint::new(LOGIN_PATH)
}

pub fn registered() -> Contract {
    Contract::new(200).expect(|e| e.keys_in_order(vec!["id", "token"]))
}

pub fn logged_in() -> Contract {
    Contract::new(200).expect(|e| e.keys_in_order(vec!["token"]))
}

pub fn missing_password() -> Contract {
    Contract::new(400).expect(|e| e.body_equals(json!({"error": "Missing password"})))
}

/// Registration and login report a missing email the same way.
pub fn missing_email() -> Contract {
    Contract::new(400).expect(|e| e.body_equals(json!({"error": "Missing email or username"})))
}
