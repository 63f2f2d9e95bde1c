use crate::{error::Error, http_client::HttpClient, RequestData, ResponseData};
use serde_json::Value;
use std::{
    collections::HashMap,
    fmt::{self, Debug},
    sync::{Arc, Mutex},
};

type Responder = Box<dyn Fn(&RequestData) -> Result<ResponseData, Error> + Send + Sync>;

/// Transport that records every request and answers from a closure.
pub(crate) struct FakeHttpClient {
    responder: Responder,
    requests: Mutex<Vec<RequestData>>,
}

impl FakeHttpClient {
    pub(crate) fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&RequestData) -> Result<ResponseData, Error> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn replying(status_code: u16, body: Value) -> Arc<Self> {
        Self::new(move |_| Ok(response(status_code, body.clone())))
    }

    pub(crate) fn requests(&self) -> Vec<RequestData> {
        self.requests.lock().unwrap().clone()
    }
}

impl Debug for FakeHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeHttpClient").finish()
    }
}

impl HttpClient for FakeHttpClient {
    fn make_request(&self, request_data: &RequestData) -> Result<ResponseData, Error> {
        self.requests.lock().unwrap().push(request_data.clone());
        (self.responder)(request_data)
    }
}

pub(crate) fn response(status_code: u16, body: Value) -> ResponseData {
    ResponseData {
        status_code,
        headers: HashMap::new(),
        body: match body {
            Value::Object(map) => map,
            _ => Default::default(),
        },
    }
}
