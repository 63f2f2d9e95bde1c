//! Contracts for the documented reqres.in resources.
//!
//! The service is lenient in a few places and the contracts follow what it
//! actually does rather than what a stricter API would do:
//!
//! - creating a user accepts any subset of fields, including none, and
//!   echoes back whatever was sent;
//! - `PUT` and `PATCH` on a user never complain about missing fields;
//! - deleting a user answers 204 whether or not the user exists, so a second
//!   delete looks exactly like the first;
//! - listing an undefined collection such as `/api/unknown` still answers 200.
//!
//! None of these have a negative path worth asserting, so there are no
//! missing-field contracts for creation or updates.

pub mod auth;
pub mod users;
