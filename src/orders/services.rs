use rand::Rng;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::{
    error::DomainError,
    ids::{generate_code, generate_id},
    orders::repo_types::{Order, OrderStatus},
    users::repo_types::{User, UserRole},
};

/// Whether `user` is offered a claim control for `order`.
pub fn can_claim(user: &User, order: &Order) -> bool {
    user.role == UserRole::Courier && order.status == OrderStatus::Pending
}

/// Creates a pending order owned by `client`. The item text is not validated.
pub fn create_order<R: Rng + ?Sized>(
    orders: &mut Vec<Order>,
    client: &User,
    item: String,
    rng: &mut R,
    now: OffsetDateTime,
) -> Result<Order, DomainError> {
    if client.role != UserRole::Client {
        warn!(user_id = %client.id, "courier tried to create an order");
        return Err(DomainError::ClientsOnly);
    }

    let order = Order {
        id: generate_id(rng, "BBX"),
        item,
        client: client.name.clone(),
        status: OrderStatus::Pending,
        code: generate_code(rng),
        created_at: now,
        courier: None,
    };
    orders.push(order.clone());

    info!(order_id = %order.id, user_id = %client.id, "order created");
    Ok(order)
}

/// Moves the first pending order with `order_id` to assigned and records
/// the courier's display name.
pub fn claim_order(
    orders: &mut [Order],
    courier: &User,
    order_id: &str,
) -> Result<Order, DomainError> {
    if courier.role != UserRole::Courier {
        warn!(user_id = %courier.id, order_id, "client tried to claim an order");
        return Err(DomainError::CouriersOnly);
    }

    if let Some(order) = Order::find_pending_mut(orders, order_id) {
        order.status = OrderStatus::Assigned;
        order.courier = Some(courier.name.clone());
        info!(order_id, user_id = %courier.id, status = %order.status, "order assigned");
        return Ok(order.clone());
    }

    if Order::exists(orders, order_id) {
        warn!(order_id, "order already assigned");
        Err(DomainError::OrderNotPending(order_id.to_string()))
    } else {
        warn!(order_id, "order not found");
        Err(DomainError::OrderNotFound(order_id.to_string()))
    }
}
