//! Every check the suite makes against the service, one function per case.
//!
//! Cases are independent: each builds its own request body, performs its own
//! calls and verifies its own contract. [`run_suite`] runs them one after the
//! other and keeps going past failures.

use crate::{
    error::Error,
    resources::{auth, users},
    ContractViolation, RequestBody, ReqresClient,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub enum Group {
    Listing,
    Creation,
    Update,
    Deletion,
    Registration,
    Login,
}

#[derive(Debug, Error)]
pub enum CaseFailure {
    #[error("transport failure: {0}")]
    Transport(#[from] Error),
    #[error("contract violated: {0}")]
    Contract(#[from] ContractViolation),
}

pub type CaseResult = Result<(), CaseFailure>;

#[derive(Clone, Copy)]
pub struct Case {
    pub group: Group,
    pub name: &'static str,
    pub run: fn(&ReqresClient) -> CaseResult,
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("group", &self.group)
            .field("name", &self.name)
            .finish()
    }
}

pub fn list_users_echoes_requested_page(client: &ReqresClient) -> CaseResult {
    let response = client.get(users::page(2))?;
    users::list_page(2).verify(&response)?;
    Ok(())
}

pub fn list_users_echoes_each_page(client: &ReqresClient) -> CaseResult {
    for page in 1..=2 {
        let response = client.get(users::page(page))?;
        users::list_page(page).verify(&response)?;
    }
    Ok(())
}

pub fn list_users_beyond_last_page_is_empty(client: &ReqresClient) -> CaseResult {
    let response = client.get(users::page(99))?;
    users::list_page_beyond_range(99).verify(&response)?;
    Ok(())
}

pub fn list_unknown_resource_succeeds(client: &ReqresClient) -> CaseResult {
    let response = client.get(users::unknown())?;
    users::list_unknown().verify(&response)?;
    Ok(())
}

pub fn create_user(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new()
        .field("name", "morpheus")
        .field("job", "leader");
    let response = client.post(users::USERS_PATH, &body)?;
    users::created(&body).verify(&response)?;
    Ok(())
}

pub fn create_user_with_job_only(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new().field("job", "leader");
    let response = client.post(users::USERS_PATH, &body)?;
    users::created(&body).verify(&response)?;
    Ok(())
}

pub fn create_user_with_name_only(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new().field("name", "morpheus");
    let response = client.post(users::USERS_PATH, &body)?;
    users::created(&body).verify(&response)?;
    Ok(())
}

pub fn update_user(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new()
        .field("name", "morpheus")
        .field("job", "zion resident");
    let response = client.put(users::user(2), &body)?;
    users::updated(&body).verify(&response)?;
    Ok(())
}

pub fn patch_user_one_field(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new().field("name", "morpheus");
    let response = client.patch(users::user(2), &body)?;
    users::updated(&body).verify(&response)?;
    Ok(())
}

pub fn delete_user(client: &ReqresClient) -> CaseResult {
    let response = client.delete(users::user(2))?;
    users::deleted().verify(&response)?;
    Ok(())
}

pub fn delete_user_twice(client: &ReqresClient) -> CaseResult {
    for _ in 0..2 {
        let response = client.delete(users::user(2))?;
        users::deleted().verify(&response)?;
    }
    Ok(())
}

pub fn register_user(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new()
        .field("email", "eve.holt@reqres.in")
        .field("password", "pistol");
    let response = client.post(auth::register(), &body)?;
    auth::registered().verify(&response)?;
    Ok(())
}

pub fn register_user_without_password(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new().field("email", "sydney@fife");
    let response = client.post(auth::register(), &body)?;
    auth::missing_password().verify(&response)?;
    Ok(())
}

pub fn register_user_without_email(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new().field("password", "pistol");
    let response = client.post(auth::register(), &body)?;
    auth::missing_email().verify(&response)?;
    Ok(())
}

pub fn login_user(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new()
        .field("email", "eve.holt@reqres.in")
        .field("password", "cityslicka");
    let response = client.post(auth::login(), &body)?;
    auth::logged_in().verify(&response)?;
    Ok(())
}

pub fn login_user_without_password(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new().field("email", "peter@klaven");
    let response = client.post(auth::login(), &body)?;
    auth::missing_password().verify(&response)?;
    Ok(())
}

pub fn login_user_without_email(client: &ReqresClient) -> CaseResult {
    let body = RequestBody::new().field("password", "pistol");
    let response = client.post(auth::login(), &body)?;
    auth::missing_email().verify(&response)?;
    Ok(())
}

macro_rules! case {
    ($group:ident, $run:ident) => {
        Case {
            group: Group::$group,
            name: stringify!($run),
            run: $run,
        }
    };
}

pub fn catalogue() -> Vec<Case> {
    vec![
        case!(Listing, list_users_echoes_requested_page),
        case!(Listing, list_users_echoes_each_page),
        case!(Listing, list_users_beyond_last_page_is_empty),
        case!(Listing, list_unknown_resource_succeeds),
        case!(Creation, create_user),
        case!(Creation, create_user_with_job_only),
        case!(Creation, create_user_with_name_only),
        case!(Update, update_user),
        case!(Update, patch_user_one_field),
        case!(Deletion, delete_user),
        case!(Deletion, delete_user_twice),
        case!(Registration, register_user),
        case!(Registration, register_user_without_password),
        case!(Registration, register_user_without_email),
        case!(Login, login_user),
        case!(Login, login_user_without_password),
        case!(Login, login_user_without_email),
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub group: Group,
    pub name: &'static str,
    pub failure: Option<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn outcomes(&self) -> &[CaseOutcome] {
        &self.outcomes
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CaseOutcome::passed)
    }
}

/// Runs the cases in order against one client. A failing case never stops the ones after it.
pub fn run_suite<'a, I: IntoIterator<Item = &'a Case>>(
    client: &ReqresClient,
    cases: I,
) -> SuiteReport {
    let mut report = SuiteReport::default();

    for case in cases {
        let failure = match (case.run)(client) {
            Ok(()) => {
                tracing::info!(group = ?case.group, case = case.name, "Case passed");
                None
            }
            Err(e) => {
                tracing::warn!(group = ?case.group, case = case.name, error = %e, "Case failed");
                Some(e.to_string())
            }
        };

        report.outcomes.push(CaseOutcome {
            group: case.group,
            name: case.name,
            failure,
        });
    }

    tracing::info!(
        passed = report.passed(),
        total = report.outcomes.len(),
        "Suite finished"
    );

    report
}
