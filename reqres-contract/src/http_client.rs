use crate::{error::Error, Method, RequestData, ResponseData};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::{collections::HashMap, fmt::Debug};

type ReqwestClient = reqwest::blocking::Client;

/// Transport used by [`ReqresClient`](crate::ReqresClient) to reach the service.
pub trait HttpClient: Debug {
    fn make_request(&self, request_data: &RequestData) -> Result<ResponseData, Error>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    http: ReqwestClient,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            http: ReqwestClient::new(),
        }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    fn extract_headers(header_map: &HeaderMap) -> HashMap<String, String> {
        // it currently ignores header values with opaque characters
        header_map
            .iter()
            .map(|(k, v)| (String::from(k.as_str()), v.to_str()))
            .filter_map(|(key, value)| value.ok().map(|v| (key, String::from(v))))
            .collect::<HashMap<_, _>>()
    }

    fn put_headers<'a, I: IntoIterator<Item = (&'a String, &'a String)>>(
        header_map: &mut HeaderMap,
        headers: I,
    ) -> Result<(), Error> {
        for (key, value) in headers {
            let header_name = HeaderName::from_lowercase(key.to_lowercase().as_bytes())
                .map_err(|_| Error::InvalidHeaderName(key.clone()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| Error::InvalidHeaderValue(key.clone()))?;
            header_map.append(header_name, header_value);
        }

        Ok(())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn make_request(&self, request_data: &RequestData) -> Result<ResponseData, Error> {
        let mut headers = HeaderMap::new();
        Self::put_headers(&mut headers, &request_data.headers)?;

        let mut request_builder = self
            .http
            .request(Self::method(request_data.method), request_data.url.as_str())
            .headers(headers);

        if let Some(body) = &request_data.body {
            request_builder = request_builder.form(body.fields());
        }

        let response = request_builder.send()?;

        let status_code = response.status().as_u16();
        let headers = Self::extract_headers(response.headers());
        let body = ResponseData::parse_body(&response.text()?)?;

        Ok(ResponseData {
            status_code,
            headers,
            body,
        })
    }
}
