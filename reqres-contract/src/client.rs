use crate::{
    configuration::{ContractConfiguration, DEFAULT_DOMAIN_NAME},
    error::Error,
    http_client::HttpClient,
    mutations::{MutationsBuilder, RequestMutation},
    Endpoint, Method, RequestBody, RequestData, ReqwestHttpClient, ResponseData,
};
use std::{collections::HashMap, sync::Arc};

/// Builder used to build a ReqresClient instance
#[derive(Debug, Default)]
pub struct ReqresClientBuilder {
    domain_name: Option<String>,
    http_client: Option<Arc<dyn HttpClient + Send + Sync>>,
    request_mutations: Vec<RequestMutation>,
}

impl ReqresClientBuilder {
    /// Create a new ReqresClientBuilder instance.
    pub fn new() -> Self {
        Self {
            domain_name: None,
            http_client: None,
            request_mutations: Vec::new(),
        }
    }

    /// Use the given domain_name when building a ReqresClient instance.
    ///
    /// # Arguments
    /// `domain_name` - the base URL every endpoint path is appended to.
    ///
    /// # Returns
    /// This builder.
    pub fn with_domain_name<T: Into<String>>(mut self, domain_name: T) -> Self {
        self.domain_name = Some(domain_name.into());
        self
    }

    /// Use the given transport when building a ReqresClient instance.
    ///
    /// # Arguments
    /// `client` - any [`HttpClient`] implementation, the blocking reqwest one by default.
    ///
    /// # Returns
    /// This builder.
    pub fn with_http_client(mut self, client: Arc<dyn HttpClient + Send + Sync>) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Apply the given mutations to every request the built client sends.
    pub fn with_request_mutations<F: FnOnce(&mut MutationsBuilder) -> &mut MutationsBuilder>(
        mut self,
        func: F,
    ) -> Self {
        let mut mutations = MutationsBuilder::new();
        let _ = func(&mut mutations);
        self.request_mutations
            .extend(mutations.into_request_mutations());
        self
    }

    /// Consume the builder and create a ReqresClient instance using all of the previously
    /// configured values or their defaults.
    ///
    /// # Returns
    /// A ReqresClient instance.
    pub fn build(mut self) -> ReqresClient {
        ReqresClient {
            http: self
                .http_client
                .take()
                .unwrap_or_else(|| Arc::new(ReqwestHttpClient::new())),
            domain_name: self
                .domain_name
                .take()
                .unwrap_or_else(|| String::from(DEFAULT_DOMAIN_NAME)),
            request_mutations: self.request_mutations,
        }
    }
}

/// Struct that represents a client of the reqres.in mock REST API.
#[derive(Debug)]
pub struct ReqresClient {
    http: Arc<dyn HttpClient + Send + Sync>,
    domain_name: String,
    request_mutations: Vec<RequestMutation>,
}

impl ReqresClient {
    /// Create a ReqresClient pointing at reqres.in with the default reqwest transport.
    pub fn new() -> Self {
        ReqresClientBuilder::new().build()
    }

    /// Create a ReqresClient from a test configuration.
    pub fn from_configuration(configuration: ContractConfiguration) -> Self {
        let (domain_name, http_client, request_mutations) = configuration.into_parts();

        ReqresClient {
            http: http_client.unwrap_or_else(|| Arc::new(ReqwestHttpClient::new())),
            domain_name,
            request_mutations,
        }
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    /// Performs one call against the configured domain.
    ///
    /// # Arguments
    /// `method` - HTTP verb.
    /// `endpoint` - path starting with `/`, with optional query parameters.
    /// `body` - optional flat fields, sent form-encoded in insertion order.
    ///
    /// # Returns
    /// The status code, headers and parsed JSON object body. Transport failures, unparseable
    /// URLs and non-JSON bodies are errors.
    pub fn call(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<&RequestBody>,
    ) -> Result<ResponseData, Error> {
        if !endpoint.path().starts_with('/') {
            return Err(Error::InvalidPath(endpoint.path().into()));
        }

        let mut request_data = RequestData {
            url: endpoint.url(&self.domain_name)?,
            method,
            headers: HashMap::new(),
            body: body.cloned(),
        };

        for mutation in &self.request_mutations {
            mutation.mutate(&mut request_data);
        }

        tracing::debug!(%method, url = %request_data.url, "Sending request");

        let response = self.http.make_request(&request_data).map_err(|e| {
            tracing::warn!(%method, url = %request_data.url, error = %e, "Request failed");
            e
        })?;

        tracing::debug!(
            %method,
            url = %request_data.url,
            status = response.status_code,
            "Received response"
        );

        Ok(response)
    }

    pub fn get<E: Into<Endpoint>>(&self, endpoint: E) -> Result<ResponseData, Error> {
        self.call(Method::Get, &endpoint.into(), None)
    }

    pub fn post<E: Into<Endpoint>>(
        &self,
        endpoint: E,
        body: &RequestBody,
    ) -> Result<ResponseData, Error> {
        self.call(Method::Post, &endpoint.into(), Some(body))
    }

    pub fn put<E: Into<Endpoint>>(
        &self,
        endpoint: E,
        body: &RequestBody,
    ) -> Result<ResponseData, Error> {
        self.call(Method::Put, &endpoint.into(), Some(body))
    }

    pub fn patch<E: Into<Endpoint>>(
        &self,
        endpoint: E,
        body: &RequestBody,
    ) -> Result<ResponseData, Error> {
        self.call(Method::Patch, &endpoint.into(), Some(body))
    }

    pub fn delete<E: Into<Endpoint>>(&self, endpoint: E) -> Result<ResponseData, Error> {
        self.call(Method::Delete, &endpoint.into(), None)
    }
}

impl Default for ReqresClient {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Endpoint {
    fn from(path: &str) -> Self {
        Endpoint::new(path)
    }
}

impl From<String> for Endpoint {
    fn from(path: String) -> Self {
        Endpoint::new(path)
    }
}
