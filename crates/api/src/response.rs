//! Shared response types for API handlers.
//!
//! Mutating endpoints acknowledge success with a small fixed body
//! instead of echoing the affected row. Use [`Ack`] instead of ad-hoc
//! `serde_json::json!` literals so the shape stays consistent.

use serde::Serialize;

/// Acknowledgment body for create/update/delete endpoints:
/// `{ "status_code": ..., "transaction": ... }`.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub status_code: u16,
    pub transaction: &'static str,
}

impl Ack {
    /// 201 acknowledgment for successful creation.
    pub fn created() -> Self {
        Ack {
            status_code: 201,
            transaction: "Successful",
        }
    }

    /// 200 acknowledgment with an operation-specific message.
    pub fn ok(transaction: &'static str) -> Self {
        Ack {
            status_code: 200,
            transaction,
        }
    }
}
