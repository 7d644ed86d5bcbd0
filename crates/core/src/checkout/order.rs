//! Order payload

use serde::Serialize;

use crate::{cart::Cart, checkout::Customer, lessons::LessonId};

/// One reserved lesson inside an order payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Id of the ordered lesson.
    pub lesson_id: LessonId,

    /// Subject snapshot from the cart line.
    pub subject: String,

    /// Location snapshot from the cart line.
    pub location: String,

    /// Price per space.
    pub price: u64,

    /// Ordered quantity.
    pub qty: u64,
}

/// The transient order snapshot handed to the remote service at submission.
///
/// Built from the cart and customer, serialized, then discarded; never stored
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    /// Customer contact data at submission time.
    pub customer: Customer,

    /// One entry per cart line.
    pub items: Vec<OrderItem>,

    /// Sum of `price × qty` over all items.
    pub total: u64,
}

impl Order {
    /// Snapshot the cart and customer into an order payload.
    #[must_use]
    pub fn from_cart(customer: &Customer, cart: &Cart) -> Self {
        let items = cart
            .iter()
            .map(|line| OrderItem {
                lesson_id: line.id.clone(),
                subject: line.subject.clone(),
                location: line.location.clone(),
                price: line.price,
                qty: line.qty,
            })
            .collect();

        Self {
            customer: customer.clone(),
            items,
            total: cart.total(),
        }
    }
}
