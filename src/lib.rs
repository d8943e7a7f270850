//! bloglist - A token-authenticated blogging REST API
//!
//! Blogs are owned by users; creation and deletion require a bearer token.

pub mod auth;
pub mod blog;
pub mod cli;
pub mod http_server;
pub mod observability;
