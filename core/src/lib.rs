//! Synchronous client for the accounts service.
//!
//! # Overview
//! Creates, reads, updates and deletes business accounts, manages their
//! members and role assignments, and maintains the sanctioned-country list.
//! The service is the source of truth; the client only shapes requests,
//! validates inputs and classifies responses.
//!
//! # Design
//! - `AccountsClient` holds an immutable `ClientConfig` and a `Transport`.
//!   It keeps no other state, so one instance serves many threads.
//! - Each operation is split into `build_*` (validate + produce request),
//!   `parse_*` (classify + decode response) and a method that runs both
//!   through the transport, one attempt per call.
//! - Paths and header sets are stated per endpoint; the service does not
//!   follow a single routing convention.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

mod business;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
mod members;
mod request;
mod sanctions;
pub mod transport;
pub mod types;
pub mod validate;

#[cfg(test)]
mod testing;

pub use client::AccountsClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport, DEFAULT_TIMEOUT};
pub use types::{
    AccountMembership, AddMemberToBusinessAccountInput, Business, CreateBusinessAccountInput,
    SanctionStatus, SanctionedCountry, UpdateAccountMembershipEvent, UpdateBusinessAccountInput,
    UpdateMemberRoleInput,
};
pub use validate::Validate;
