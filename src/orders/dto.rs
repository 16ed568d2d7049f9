use serde::Deserialize;

/// Request body for the create-order form. The item is not validated.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub item: String,
}
