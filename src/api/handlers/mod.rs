//! HTTP request handlers for API endpoints.
//!
//! Handlers are organized by resource type; each module exposes an
//! `OpenApiRouter` so routes and their documentation are registered together.

pub mod auth;
pub mod books;
pub mod categories;
pub mod me;
pub mod orders;
pub mod upload;
pub mod users;
