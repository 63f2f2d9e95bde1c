use crate::{Contract, Endpoint, RequestBody};
use lazy_static::lazy_static;
use regex::Regex;

pub const USERS_PATH: &str = "/api/users";
pub const UNKNOWN_PATH: &str = "/api/unknown";

lazy_static! {
    static ref ID_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
    static ref TIMESTAMP_REGEX: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?Z$").unwrap();
}

pub fn page(page: u32) -> Endpoint {
    Endpoint::new(USERS_PATH).with_query("page", page)
}

pub fn user(id: u32) -> Endpoint {
    Endpoint::new(format!("{}/{}", USERS_PATH, id))
}

pub fn unknown() -> Endpoint {
    Endpoint::new(UNKNOWN_PATH)
}

/// `GET /api/users?page=N` echoes the requested page.
pub fn list_page(page: u32) -> Contract {
    Contract::new(200).expect(|e| e.field_equals("page", page))
}

/// Past the last page the listing is still a 200, just with no users in it.
pub fn list_page_beyond_range(page: u32) -> Contract {
    Contract::new(200).expect(|e| e.field_equals("page", page).field_is_empty_array("data"))
}

pub fn list_unknown() -> Contract {
    Contract::new(200)
}

/// The created user is the submitted fields in submission order, then `id` and `createdAt`.
pub fn created(body: &RequestBody) -> Contract {
    let keys = body
        .keys()
        .chain(vec!["id", "createdAt"])
        .map(String::from)
        .collect::<Vec<_>>();

    Contract::new(201).expect(|e| {
        e.keys_in_order(keys)
            .fields_echo(body)
            .field_matches("id", ID_REGEX.clone())
            .field_matches("createdAt", TIMESTAMP_REGEX.clone())
    })
}

/// Shared by `PUT` and `PATCH`: both answer 200 and echo what was sent.
pub fn updated(body: &RequestBody) -> Contract {
    Contract::new(200).expect(|e| e.fields_echo(body))
}

pub fn deleted() -> Contract {
    Contract::new(204)
}
