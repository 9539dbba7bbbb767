//! Entity storage, validation, and list queries for folio.
//!
//! This crate owns the portfolio's persisted entities (projects, the
//! about page, contact details, site settings) and everything that
//! operates on them:
//!
//! - **entity**: the record types, serialized as JSON
//! - **validate**: field-scoped validation with per-field error lists
//! - **session**: the caller identity mutations are checked against
//! - **actions**: authorization-guarded CRUD in the safe-action shape
//! - **query**: filter/sort/pagination over the project list
//! - **cache**: short-TTL memoization of list results
//! - **store**: whole-file JSON persistence

#![warn(missing_docs)]

mod actions;
mod cache;
mod entity;
mod error;
mod query;
mod session;
mod store;
mod validate;

pub use actions::{
    ActionOutcome, UNAUTHORIZED, delete_projects, update_about, update_contact, update_settings,
    upsert_project,
};
pub use cache::QueryCache;
pub use entity::{About, Contact, Project, ProjectDraft, Settings};
pub use error::StoreError;
pub use query::{Filter, FilterField, FilterOp, ListQuery, ListResult, Sort, SortField, run_query};
pub use session::{Role, Session};
pub use store::Store;
pub use validate::{FieldErrors, slugify, validate_contact, validate_project, validate_text_page};
