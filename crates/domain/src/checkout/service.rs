use common::{EntityId, Money};

use super::{Order, OrderError, OrderItem};
use crate::customer::Customer;

/// Checkout operations spanning orders and customers.
pub struct OrderService;

impl OrderService {
    /// Places a new order for `customer` and credits them one reward point per
    /// whole currency unit of half the order total.
    #[tracing::instrument(skip_all, fields(customer_id = %customer.id()))]
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::NoItems);
        }
        let order = Order::new(EntityId::generate(), customer.id().clone(), items)?;
        let points = order.total().half().units().max(0) as u64;
        customer.add_reward_points(points);
        tracing::debug!(order_id = %order.id(), total = %order.total(), points, "order placed");
        Ok(order)
    }

    /// Returns the combined total of `orders`.
    pub fn total(orders: &[Order]) -> Result<Money, OrderError> {
        Money::checked_sum(orders.iter().map(Order::total)).ok_or(OrderError::TotalOverflow)
    }
}
