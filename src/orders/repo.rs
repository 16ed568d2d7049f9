use crate::orders::repo_types::{Order, OrderStatus};

impl Order {
    /// Orders owned by this client display name (exact string match).
    pub fn list_by_client<'a>(orders: &'a [Order], client: &'a str) -> impl Iterator<Item = &'a Order> {
        orders.iter().filter(move |o| o.client == client)
    }

    /// Orders claimed by this courier display name (exact string match).
    pub fn list_by_courier<'a>(orders: &'a [Order], courier: &'a str) -> impl Iterator<Item = &'a Order> {
        orders
            .iter()
            .filter(move |o| o.courier.as_deref() == Some(courier))
    }

    /// First pending order with this id, in creation order.
    pub fn find_pending_mut<'a>(orders: &'a mut [Order], id: &str) -> Option<&'a mut Order> {
        orders
            .iter_mut()
            .find(|o| o.id == id && o.status == OrderStatus::Pending)
    }

    pub fn exists(orders: &[Order], id: &str) -> bool {
        orders.iter().any(|o| o.id == id)
    }
}
