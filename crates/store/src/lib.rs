//! Codex Synapse embedding store reader.
//!
//! Reads chunk embeddings joined to their parent documents so the
//! visualization pipeline can project them into 3D.
//!
//! ## What we do
//!
//! - Build a filtered query (document, project, vault-only) over
//!   `embeddings JOIN documents`, ordered by primary key with a row ceiling
//! - Decode the stored vector text strictly (JSON array of finite numbers)
//! - Truncate chunk text to a preview
//!
//! ## What we don't do
//!
//! - Pagination. The row ceiling is a safety cap; callers that need more rows
//!   must narrow their filters.
//! - Caching. Every call opens a fresh connection and closes it before
//!   returning, so no connection is held while the caller crunches numbers.
//!
//! An empty match is an empty `Vec`, never an error.

mod config;
mod error;
mod memory;
mod pg;
mod query;
mod record;
mod source;
mod vector;

pub use crate::config::{DatabaseConfig, DEFAULT_PREVIEW_CHARS, DEFAULT_ROW_LIMIT};
pub use crate::error::{BoxError, StoreError};
pub use crate::memory::InMemoryStore;
pub use crate::pg::PostgresStore;
pub use crate::query::EmbeddingQuery;
pub use crate::record::{preview, EmbeddingRecord, StoreFilters};
pub use crate::source::EmbeddingSource;
pub use crate::vector::parse_vector;
