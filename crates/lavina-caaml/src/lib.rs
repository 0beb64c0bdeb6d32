//! CAAML v6 payload validation
//!
//! The boundary between untrusted, provider-delivered JSON and the
//! canonical bulletin model. Payloads that cannot be decoded or do not
//! match the schema never produce an error past this crate: validation is
//! total and degrades to a caller-supplied fallback, so one provider's
//! malformed document only ever costs that provider's regions.

pub mod adapter;
pub mod validator;

pub use validator::{try_validate, validate_payload, ValidationError};
