//! Client for the natural-language query/verification service.

pub mod api;

pub use api::{QueryError, QueryRequest, QueryResponse, Row, Verification, run_query};
