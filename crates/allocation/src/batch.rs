use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;

use stockalloc_core::{BatchRef, DomainError, DomainResult, Entity, Quantity, Sku};

use crate::order_line::OrderLine;

/// Outcome of asking a batch whether it can take (or give back) an order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    /// Carries the error the matching mutation would fail with.
    Ineligible(DomainError),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    pub fn reason(&self) -> Option<&DomainError> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::Ineligible(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> DomainResult<()> {
        match self {
            Eligibility::Eligible => Ok(()),
            Eligibility::Ineligible(reason) => Err(reason),
        }
    }
}

/// Entity: Batch.
///
/// A lot of stock for one SKU. Without an `eta` the batch is already in the
/// warehouse; with one it is a shipment due on that date.
///
/// Identity is the `reference`: equality and hashing ignore every other field.
#[derive(Debug, Clone)]
pub struct Batch {
    reference: BatchRef,
    sku: Sku,
    eta: Option<NaiveDate>,
    purchased_quantity: Quantity,
    available_quantity: Quantity,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    pub fn new(
        reference: impl Into<BatchRef>,
        sku: impl Into<Sku>,
        quantity: u32,
        eta: Option<NaiveDate>,
    ) -> DomainResult<Self> {
        let reference = reference.into();
        let sku = sku.into();
        if reference.is_blank() {
            return Err(DomainError::validation("reference cannot be empty"));
        }
        if sku.is_blank() {
            return Err(DomainError::validation("sku cannot be empty"));
        }

        let quantity = Quantity::new(quantity);
        Ok(Self {
            reference,
            sku,
            eta,
            purchased_quantity: quantity,
            available_quantity: quantity,
            allocations: HashSet::new(),
        })
    }

    pub fn reference(&self) -> &BatchRef {
        &self.reference
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    /// In the warehouse already (no expected arrival date).
    pub fn is_in_stock(&self) -> bool {
        self.eta.is_none()
    }

    pub fn purchased_quantity(&self) -> Quantity {
        self.purchased_quantity
    }

    pub fn available_quantity(&self) -> Quantity {
        self.available_quantity
    }

    pub fn allocated_quantity(&self) -> Quantity {
        self.purchased_quantity.saturating_sub(self.available_quantity)
    }

    pub fn allocated_lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.allocations.iter()
    }

    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    pub fn can_allocate(&self, line: &OrderLine) -> Eligibility {
        if line.sku() != &self.sku {
            return Eligibility::Ineligible(DomainError::sku_mismatch(&self.sku, line.sku()));
        }
        if line.quantity() > self.available_quantity {
            return Eligibility::Ineligible(DomainError::insufficient_quantity(
                line.quantity(),
                self.available_quantity,
            ));
        }
        if self.allocations.contains(line) {
            return Eligibility::Ineligible(DomainError::duplicate_allocation(
                line.order_id(),
                &self.reference,
            ));
        }
        Eligibility::Eligible
    }

    pub fn allocate(&mut self, line: &OrderLine) -> DomainResult<()> {
        self.can_allocate(line).into_result()?;

        self.available_quantity = self
            .available_quantity
            .checked_sub(line.quantity())
            .ok_or_else(|| {
                DomainError::insufficient_quantity(line.quantity(), self.available_quantity)
            })?;
        self.allocations.insert(line.clone());

        tracing::debug!(
            reference = %self.reference,
            order_id = %line.order_id(),
            sku = %line.sku(),
            quantity = line.quantity().get(),
            available = self.available_quantity.get(),
            "order line allocated"
        );
        Ok(())
    }

    pub fn can_deallocate(&self, line: &OrderLine) -> Eligibility {
        if !self.allocations.contains(line) {
            return Eligibility::Ineligible(DomainError::not_allocated(
                line.order_id(),
                &self.reference,
            ));
        }
        Eligibility::Eligible
    }

    pub fn deallocate(&mut self, line: &OrderLine) -> DomainResult<()> {
        self.can_deallocate(line).into_result()?;

        self.available_quantity = self
            .available_quantity
            .checked_add(line.quantity())
            .ok_or_else(|| DomainError::validation("available quantity overflow"))?;
        self.allocations.remove(line);

        tracing::debug!(
            reference = %self.reference,
            order_id = %line.order_id(),
            sku = %line.sku(),
            quantity = line.quantity().get(),
            available = self.available_quantity.get(),
            "order line deallocated"
        );
        Ok(())
    }
}

impl Entity for Batch {
    type Id = BatchRef;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for Batch {}

impl core::hash::Hash for Batch {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

/// Allocation priority of two batches: `Less` means `a` is used first.
///
/// Warehouse stock comes before any shipment, and shipments come in order of
/// arrival. Two warehouse batches (or two shipments due the same day) compare
/// `Equal`, so a stable sort keeps them in their original order.
pub fn by_priority(a: &Batch, b: &Batch) -> Ordering {
    match (a.eta, b.eta) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a_eta), Some(b_eta)) => a_eta.cmp(&b_eta),
    }
}
