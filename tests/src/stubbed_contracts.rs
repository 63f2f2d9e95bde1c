use crate::support::StubbedReqres;
use pretty_assertions::assert_eq;
use reqres_contract::{
    cases::{self, CaseFailure},
    expectations::Violation,
    resources::users,
    ContractViolation, Error, ReqresClientBuilder, RequestBody,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

macro_rules! stubbed_case {
    ($($case:ident),* $(,)?) => {
        $(
            #[test]
            fn $case() {
                let stub = StubbedReqres::with_documented_responses();
                let client = stub.client();

                if let Err(e) = cases::$case(&client) {
                    panic!("{} failed: {}", stringify!($case), e);
                }
            }
        )*
    };
}

stubbed_case!(
    list_users_echoes_requested_page,
    list_users_echoes_each_page,
    list_users_beyond_last_page_is_empty,
    list_unknown_resource_succeeds,
    create_user,
    create_user_with_job_only,
    create_user_with_name_only,
    update_user,
    patch_user_one_field,
    delete_user,
    delete_user_twice,
    register_user,
    register_user_without_password,
    register_user_without_email,
    login_user,
    login_user_without_password,
    login_user_without_email,
);

#[test]
fn whole_suite_passes_against_documented_responses() {
    let stub = StubbedReqres::with_documented_responses();
    let client = stub.client();
    let catalogue = cases::catalogue();

    let report = cases::run_suite(&client, &catalogue);

    assert_eq!(
        report.failed().map(|o| o.name).collect::<Vec<_>>(),
        Vec::<&str>::new()
    );
    assert_eq!(report.passed(), catalogue.len());
}

#[test]
fn bodies_are_sent_form_encoded_in_insertion_order() {
    let stub = StubbedReqres::with_documented_responses();
    let client = stub.client();

    cases::create_user(&client).unwrap();
    cases::register_user(&client).unwrap();

    assert_eq!(
        stub.received_bodies(),
        vec![
            "name=morpheus&job=leader".to_string(),
            "email=eve.holt%40reqres.in&password=pistol".to_string(),
        ]
    );
}

#[test]
fn reordered_creation_response_violates_contract() {
    let stub = StubbedReqres::start();
    stub.mount(
        Mock::given(method("POST"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "512",
                "createdAt": "2026-10-19T09:15:02.123Z",
                "name": "morpheus",
                "job": "leader",
            }))),
    );

    match cases::create_user(&stub.client()) {
        Err(CaseFailure::Contract(ContractViolation::Body {
            violation: Violation::KeyOrder { actual, .. },
            ..
        })) => assert_eq!(actual, vec!["id", "createdAt", "name", "job"]),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn missing_stub_shows_up_as_status_violation() {
    let stub = StubbedReqres::start();

    match cases::delete_user(&stub.client()) {
        Err(CaseFailure::Contract(ContractViolation::Status {
            expected, actual, ..
        })) => {
            assert_eq!(expected, 204);
            assert_eq!(actual, 404);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn html_body_is_an_invalid_body_error() {
    let stub = StubbedReqres::start();
    stub.mount(
        Mock::given(method("GET"))
            .and(path("/api/unknown"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>")),
    );

    assert!(matches!(
        stub.client().get(users::unknown()),
        Err(Error::InvalidBody(body)) if body == "<html>maintenance</html>"
    ));
}

#[test]
fn unreachable_service_is_a_transport_error() {
    let client = ReqresClientBuilder::new()
        .with_domain_name("http://127.0.0.1:1")
        .build();

    assert!(matches!(
        client.post(users::USERS_PATH, &RequestBody::new().field("name", "morpheus")),
        Err(Error::Transport(_))
    ));
}
