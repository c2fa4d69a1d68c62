//! Today's meal log and the totals derived from it.

pub mod dto;
pub mod handlers;

pub use handlers::router;
