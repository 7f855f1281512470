//! Wire types shared between the payroll dashboard frontend and its backend.
//!
//! Everything here is plain serde data: no browser APIs, no IO.

pub mod dashboards;
pub mod domain;
pub mod shared;
