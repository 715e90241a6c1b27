//! Record types for the address-book service.
//!
//! This crate defines the contact record in both of its shapes and the
//! validation rules a candidate must pass before it may enter the store.
//! Every other abook crate depends on `abook-types`.
//!
//! # Key Types
//!
//! - [`AddressEntry`] — A stored contact record with identity and timestamps
//! - [`AddressDraft`] — A caller-supplied candidate, not yet validated and
//!   without an identity
//! - [`validate`] — The pure validation function over a draft
//! - [`ValidationError`] — The first rule a candidate violated

pub mod entry;
pub mod error;
pub mod validate;

pub use entry::{AddressDraft, AddressEntry, AddressId};
pub use error::ValidationError;
pub use validate::validate;
