use reqwest::Url;
use serde_json::{Map, Value};
use std::{collections::HashMap, fmt::Display};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path on the service plus its query parameters.
///
/// The base URL is supplied by the client when the endpoint is resolved.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Endpoint {
    path: String,
    query: Vec<(String, String)>,
}

impl Endpoint {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Query parameters are form-encoded so reserved characters stay inside their value.
    pub(crate) fn url(&self, domain_name: &str) -> Result<String, crate::Error> {
        let raw = format!("{}{}", domain_name.trim_end_matches('/'), self.path);
        let mut url = Url::parse(&raw).map_err(|_| crate::Error::InvalidUrl(raw.clone()))?;

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url.into())
    }
}

/// Flat string fields sent with a request, kept in insertion order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RequestBody {
    fields: Vec<(String, String)>,
}

impl RequestBody {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds a field, replacing the value in place if the name is already present.
    pub fn field<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        let name = name.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }

        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

#[derive(Debug, Clone)]
pub struct RequestData {
    pub url: String,
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: Option<RequestBody>,
}

#[derive(Debug, Clone)]
pub struct ResponseData {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: Map<String, Value>,
}

impl ResponseData {
    /// Parses a raw body the way the service sends it: empty for 204s, a JSON object otherwise.
    pub fn parse_body(raw: &str) -> Result<Map<String, Value>, crate::Error> {
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(raw) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Err(crate::Error::InvalidBody(raw.into())),
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        self.body.keys().map(String::as_str).collect()
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }
}
