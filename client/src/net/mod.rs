//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the auth and logo-store seams, `api` implements them
//! over HTTP, and `types` defines the shared wire schema.

pub mod api;
pub mod backend;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod types;
