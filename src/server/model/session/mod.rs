//! Session data models.
//!
//! Type-safe wrappers for the two values the server keeps in a client's session: the username
//! given at login and the upstream access token. Absence of the username means the client is
//! not logged in.

pub mod store;
pub mod token;
pub mod user;
