use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Order lifecycle. Only `Pending -> Assigned` is ever performed;
/// `Delivered` is modeled for display but no action reaches it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "asignado")]
    Assigned,
    #[serde(rename = "entregado")]
    Delivered,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pendiente",
            OrderStatus::Assigned => "asignado",
            OrderStatus::Delivered => "entregado",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery request posted by a client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Order {
    pub id: String,                 // BBX-XXXX, not guaranteed unique
    pub item: String,
    pub client: String,             // owning client's display name
    pub status: OrderStatus,
    pub code: String,               // 4-digit confirmation code
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub courier: Option<String>,    // set once claimed
}
