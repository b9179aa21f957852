//! Wire contracts shared between the dashboard and the spreadsheet order service.

pub mod domain;
pub mod shared;
pub mod system;
