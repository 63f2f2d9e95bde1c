mod add_header_mutation;

use crate::RequestData;
use add_header_mutation::AddHeaderMutation;
use std::{collections::HashMap, fmt::Debug};

pub trait HeadersMutation: Debug {
    fn mutate(&self, headers: &mut HashMap<String, String>);
}

/// A change applied to every outbound request before it reaches the transport.
#[derive(Debug)]
pub struct RequestMutation {
    mutation: Box<dyn HeadersMutation + Send + Sync>,
}

impl RequestMutation {
    pub fn mutate(&self, request_data: &mut RequestData) {
        self.mutation.mutate(&mut request_data.headers);
    }
}

pub struct MutationsBuilder {
    mutations: Vec<Box<dyn HeadersMutation + Send + Sync>>,
}

impl MutationsBuilder {
    pub(crate) fn new() -> Self {
        Self {
            mutations: Vec::new(),
        }
    }

    pub fn add_header<S1: Into<String>, S2: Into<String>>(
        &mut self,
        header_name: S1,
        header_value: S2,
    ) -> &mut Self {
        self.add_headers_mutation(AddHeaderMutation::new(header_name, header_value))
    }

    pub fn add_headers_mutation<HM: HeadersMutation + Send + Sync + 'static>(
        &mut self,
        mutation: HM,
    ) -> &mut Self {
        self.mutations.push(Box::new(mutation));
        self
    }

    pub fn into_request_mutations(self) -> Vec<RequestMutation> {
        self.mutations
            .into_iter()
            .map(|mutation| RequestMutation { mutation })
            .collect()
    }
}

impl Default for MutationsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
