use crate::{
    http_client::HttpClient,
    mutations::{MutationsBuilder, RequestMutation},
};
use std::sync::Arc;

pub const DEFAULT_DOMAIN_NAME: &str = "https://reqres.in";

#[derive(Debug)]
pub struct ContractConfiguration {
    domain_name: String,
    http_client: Option<Arc<dyn HttpClient + Send + Sync>>,
    request_mutations: Vec<RequestMutation>,
}

impl ContractConfiguration {
    pub fn new() -> Self {
        Self {
            domain_name: String::from(DEFAULT_DOMAIN_NAME),
            http_client: None,
            request_mutations: Vec::new(),
        }
    }

    pub fn set_domain_name<S: Into<String>>(&mut self, domain_name: S) {
        self.domain_name = domain_name.into();
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn set_http_client(&mut self, http_client: Arc<dyn HttpClient + Send + Sync>) {
        self.http_client = Some(http_client);
    }

    pub fn add_request_mutations<F: FnOnce(&mut MutationsBuilder) -> &mut MutationsBuilder>(
        &mut self,
        func: F,
    ) {
        let mut mutations = MutationsBuilder::new();
        let _ = func(&mut mutations);
        self.request_mutations
            .extend(mutations.into_request_mutations());
    }

    pub fn request_mutations(&self) -> &[RequestMutation] {
        &self.request_mutations
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        String,
        Option<Arc<dyn HttpClient + Send + Sync>>,
        Vec<RequestMutation>,
    ) {
        (self.domain_name, self.http_client, self.request_mutations)
    }
}

impl Default for ContractConfiguration {
    fn default() -> Self {
        Self::new()
    }
}
