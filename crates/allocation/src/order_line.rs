use serde::{Deserialize, Serialize};

use stockalloc_core::{DomainError, DomainResult, OrderId, Quantity, Sku, ValueObject};

/// Order line: a demand for `quantity` units of `sku` on behalf of an order.
///
/// Equality and hashing cover all three fields, so a line rebuilt from the same
/// data is recognised as the line a batch already holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OrderLineData")]
pub struct OrderLine {
    order_id: OrderId,
    sku: Sku,
    quantity: Quantity,
}

impl OrderLine {
    pub fn new(
        order_id: impl Into<OrderId>,
        sku: impl Into<Sku>,
        quantity: u32,
    ) -> DomainResult<Self> {
        let line = Self {
            order_id: order_id.into(),
            sku: sku.into(),
            quantity: Quantity::new(quantity),
        };
        line.validate()?;
        Ok(line)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.order_id.is_blank() {
            return Err(DomainError::validation("order_id cannot be empty"));
        }
        if self.sku.is_blank() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if self.quantity.is_zero() {
            return Err(DomainError::validation("quantity must be positive"));
        }
        Ok(())
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

impl ValueObject for OrderLine {}

/// Wire shape of an order line, checked before it becomes an `OrderLine`.
#[derive(Deserialize)]
struct OrderLineData {
    order_id: OrderId,
    sku: Sku,
    quantity: Quantity,
}

impl TryFrom<OrderLineData> for OrderLine {
    type Error = DomainError;

    fn try_from(data: OrderLineData) -> Result<Self, Self::Error> {
        OrderLine::new(data.order_id, data.sku, data.quantity.get())
    }
}
