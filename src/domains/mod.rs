//! Domains module containing business logic organized by bounded contexts.
//!
//! - **dice**: dice notation parsing and rolling
//! - **units**: unit conversion resolver chain
//! - **web**: outbound HTTP collaborators (search, URL shortening)
//! - **tools**: the MCP tool surface built on the domains above

pub mod dice;
pub mod tools;
pub mod units;
pub mod web;
