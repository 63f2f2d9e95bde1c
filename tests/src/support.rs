use reqres_contract::{ContractConfiguration, ReqresClient};
use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::{
    matchers::{body_string, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const API_KEY: &str = "reqres-free-v1";
const TIMESTAMP: &str = "2026-10-19T09:15:02.123Z";

pub fn configure_reqres(config: &mut ContractConfiguration) {
    config.add_request_mutations(|m| m.add_header("x-api-key", API_KEY));
}

/// Local stand-in serving the responses reqres.in documents, one stub per request the suite sends.
pub struct StubbedReqres {
    server: MockServer,
    runtime: Runtime,
}

impl StubbedReqres {
    pub fn start() -> Self {
        reqres_contract::init_test_logging();
        let runtime = Runtime::new().expect("Couldn't start the tokio runtime");
        let server = runtime.block_on(MockServer::start());

        Self { server, runtime }
    }

    pub fn with_documented_responses() -> Self {
        let stub = Self::start();
        stub.mount_documented_responses();
        stub
    }

    pub fn client(&self) -> ReqresClient {
        let mut configuration = ContractConfiguration::new();
        configure_reqres(&mut configuration);
        configuration.set_domain_name(self.server.uri());

        ReqresClient::from_configuration(configuration)
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn received_bodies(&self) -> Vec<String> {
        self.runtime
            .block_on(self.server.received_requests())
            .unwrap_or_default()
            .into_iter()
            .map(|request| String::from_utf8_lossy(&request.body).into_owned())
            .collect()
    }

    fn json(&self, verb: &str, endpoint: &str, form: Option<&str>, status: u16, body: Value) {
        let mut mock = Mock::given(method(verb))
            .and(path(endpoint))
            .and(header("x-api-key", API_KEY));
        if let Some(form) = form {
            mock = mock.and(body_string(form));
        }

        self.mount(mock.respond_with(ResponseTemplate::new(status).set_body_json(body)));
    }

    fn mount_documented_responses(&self) {
        for page in &[1, 2, 99] {
            let data = if *page == 99 {
                json!([])
            } else {
                json!([{"id": page * 6 - 5, "email": "george.bluth@reqres.in"}])
            };
            self.mount(
                Mock::given(method("GET"))
                    .and(path("/api/users"))
                    .and(query_param("page", page.to_string()))
                    .and(header("x-api-key", API_KEY))
                    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                        "page": page,
                        "per_page": 6,
                        "total": 12,
                        "total_pages": 2,
                        "data": data,
                    }))),
            );
        }

        self.json(
            "GET",
            "/api/unknown",
            None,
            200,
            json!({"page": 1, "per_page": 6, "data": [{"id": 1, "name": "cerulean"}]}),
        );

        for (form, echoed) in &[
            ("name=morpheus&job=leader", json!({"name": "morpheus", "job": "leader"})),
            ("job=leader", json!({"job": "leader"})),
            ("name=morpheus", json!({"name": "morpheus"})),
        ] {
            let mut created = echoed.clone();
            created["id"] = json!("512");
            created["createdAt"] = json!(TIMESTAMP);
            self.json("POST", "/api/users", Some(*form), 201, created);
        }

        self.json(
            "PUT",
            "/api/users/2",
            Some("name=morpheus&job=zion+resident"),
            200,
            json!({"name": "morpheus", "job": "zion resident", "updatedAt": TIMESTAMP}),
        );
        self.json(
            "PATCH",
            "/api/users/2",
            Some("name=morpheus"),
            200,
            json!({"name": "morpheus", "updatedAt": TIMESTAMP}),
        );

        self.mount(
            Mock::given(method("DELETE"))
                .and(path("/api/users/2"))
                .and(header("x-api-key", API_KEY))
                .respond_with(ResponseTemplate::new(204)),
        );

        let missing_password = json!({"error": "Missing password"});
        let missing_email = json!({"error": "Missing email or username"});

        self.json(
            "POST",
            "/api/register",
            Some("email=eve.holt%40reqres.in&password=pistol"),
            200,
            json!({"id": 4, "token": "QpwL5tke4Pnpja7X4"}),
        );
        self.json(
            "POST",
            "/api/register",
            Some("email=sydney%40fife"),
            400,
            missing_password.clone(),
        );
        self.json(
            "POST",
            "/api/register",
            Some("password=pistol"),
            400,
            missing_email.clone(),
        );

        self.json(
            "POST",
            "/api/login",
            Some("email=eve.holt%40reqres.in&password=cityslicka"),
            200,
            json!({"token": "QpwL5tke4Pnpja7X4"}),
        );
        self.json(
            "POST",
            "/api/login",
            Some("email=peter%40klaven"),
            400,
            missing_password,
        );
        self.json("POST", "/api/login", Some("password=pistol"), 400, missing_email);
    }
}
