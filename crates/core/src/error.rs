//! Domain error model.

use thiserror::Error;

use crate::id::{BatchRef, OrderId, Sku};
use crate::quantity::Quantity;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic precondition failure. None of them are
/// retryable, and an operation that returns one has not changed any state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed constructor input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The order line asks for a SKU the batch does not stock.
    #[error("sku mismatch: batch stocks {batch_sku}, line asks for {line_sku}")]
    SkuMismatch { batch_sku: Sku, line_sku: Sku },

    /// The order line asks for more than the batch has available.
    #[error("insufficient quantity: requested {requested}, available {available}")]
    InsufficientQuantity {
        requested: Quantity,
        available: Quantity,
    },

    /// The order line is already allocated to this batch.
    #[error("order line {order_id} is already allocated to batch {reference}")]
    DuplicateAllocation {
        order_id: OrderId,
        reference: BatchRef,
    },

    /// The order line is not allocated to this batch.
    #[error("order line {order_id} is not allocated to batch {reference}")]
    NotAllocated {
        order_id: OrderId,
        reference: BatchRef,
    },

    /// No candidate batch can take the order line.
    #[error("out of stock for SKU {sku}")]
    OutOfStock { sku: Sku },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn sku_mismatch(batch_sku: &Sku, line_sku: &Sku) -> Self {
        Self::SkuMismatch {
            batch_sku: batch_sku.clone(),
            line_sku: line_sku.clone(),
        }
    }

    pub fn insufficient_quantity(requested: Quantity, available: Quantity) -> Self {
        Self::InsufficientQuantity {
            requested,
            available,
        }
    }

    pub fn duplicate_allocation(order_id: &OrderId, reference: &BatchRef) -> Self {
        Self::DuplicateAllocation {
            order_id: order_id.clone(),
            reference: reference.clone(),
        }
    }

    pub fn not_allocated(order_id: &OrderId, reference: &BatchRef) -> Self {
        Self::NotAllocated {
            order_id: order_id.clone(),
            reference: reference.clone(),
        }
    }

    pub fn out_of_stock(sku: &Sku) -> Self {
        Self::OutOfStock { sku: sku.clone() }
    }
}
