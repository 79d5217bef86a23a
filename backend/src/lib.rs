//! Surplus food donation coordination backend.
//!
//! Donors post surplus food, receivers request and match it, volunteers
//! ferry and quality-check it, and admins watch the totals. The crate is
//! organised hexagonally: `domain` holds the entities, services, and
//! repository ports; `outbound` the persistence adapter; `inbound` the HTTP
//! surface.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by documentation tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
