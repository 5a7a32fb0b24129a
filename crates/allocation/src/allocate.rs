use stockalloc_core::{DomainError, DomainResult};

use crate::batch::{Batch, by_priority};
use crate::order_line::OrderLine;

/// Allocate `line` to the highest-priority batch that can take it.
///
/// Candidates are ranked with [`by_priority`] (warehouse stock first, then
/// shipments by arrival date; ties keep their input order). Only the selected
/// batch is mutated and the caller's collection is not reordered. Fails with
/// [`DomainError::OutOfStock`] when no candidate is eligible, in which case no
/// batch has changed.
///
/// The `&mut` borrows make the check-then-allocate step exclusive; batches
/// shared across threads must be locked by the caller for the whole call.
pub fn allocate<'a, I>(line: &OrderLine, batches: I) -> DomainResult<&'a mut Batch>
where
    I: IntoIterator<Item = &'a mut Batch>,
{
    let mut candidates: Vec<&'a mut Batch> = batches.into_iter().collect();
    candidates.sort_by(|a, b| by_priority(a, b));

    let Some(batch) = candidates
        .into_iter()
        .find(|batch| batch.can_allocate(line).is_eligible())
    else {
        tracing::warn!(
            order_id = %line.order_id(),
            sku = %line.sku(),
            quantity = line.quantity().get(),
            "no batch can take order line"
        );
        return Err(DomainError::out_of_stock(line.sku()));
    };

    tracing::debug!(
        order_id = %line.order_id(),
        reference = %batch.reference(),
        "batch selected"
    );
    batch.allocate(line)?;
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockalloc_core::Quantity;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, d).unwrap()
    }

    #[test]
    fn skips_batches_of_other_skus() {
        let mut batches = vec![
            Batch::new("batch-01", "table", 10, None).unwrap(),
            Batch::new("batch-02", "chair", 10, Some(day(5))).unwrap(),
        ];
        let line = OrderLine::new("order-01", "chair", 2).unwrap();

        let selected = allocate(&line, &mut batches).unwrap();

        assert_eq!(selected.reference().as_str(), "batch-02");
        assert_eq!(batches[0].available_quantity(), Quantity::new(10));
        assert_eq!(batches[1].available_quantity(), Quantity::new(8));
    }

    #[test]
    fn falls_back_to_later_shipment_when_earlier_is_short() {
        let mut batches = vec![
            Batch::new("batch-late", "chair", 10, Some(day(9))).unwrap(),
            Batch::new("batch-early", "chair", 1, Some(day(3))).unwrap(),
        ];
        let line = OrderLine::new("order-01", "chair", 5).unwrap();

        let selected = allocate(&line, &mut batches).unwrap();

        assert_eq!(selected.reference().as_str(), "batch-late");
        assert_eq!(batches[1].available_quantity(), Quantity::new(1));
    }

    #[test]
    fn does_not_reorder_the_callers_batches() {
        let mut batches = vec![
            Batch::new("batch-ship", "chair", 5, Some(day(3))).unwrap(),
            Batch::new("batch-stock", "chair", 5, None).unwrap(),
        ];
        let line = OrderLine::new("order-01", "chair", 1).unwrap();

        allocate(&line, &mut batches).unwrap();

        assert_eq!(batches[0].reference().as_str(), "batch-ship");
        assert_eq!(batches[1].available_quantity(), Quantity::new(4));
    }

    #[test]
    fn equal_priority_prefers_input_order() {
        let mut batches = vec![
            Batch::new("batch-a", "chair", 5, None).unwrap(),
            Batch::new("batch-b", "chair", 5, None).unwrap(),
        ];
        let line = OrderLine::new("order-01", "chair", 1).unwrap();

        let selected = allocate(&line, &mut batches).unwrap();

        assert_eq!(selected.reference().as_str(), "batch-a");
    }

    #[test]
    fn repeated_line_moves_on_to_the_next_batch() {
        let mut batches = vec![
            Batch::new("batch-a", "chair", 5, None).unwrap(),
            Batch::new("batch-b", "chair", 5, Some(day(4))).unwrap(),
        ];
        let line = OrderLine::new("order-01", "chair", 1).unwrap();

        allocate(&line, &mut batches).unwrap();
        let second = allocate(&line, &mut batches).unwrap();

        // batch-a already holds the line, so the duplicate guard rules it out.
        assert_eq!(second.reference().as_str(), "batch-b");
    }

    #[test]
    fn out_of_stock_when_no_batch_is_eligible() {
        let mut batches = vec![
            Batch::new("batch-01", "chair", 1, None).unwrap(),
            Batch::new("batch-02", "table", 9, None).unwrap(),
        ];
        let line = OrderLine::new("order-01", "chair", 2).unwrap();

        let err = allocate(&line, &mut batches).unwrap_err();

        match err {
            DomainError::OutOfStock { sku } => assert_eq!(sku.as_str(), "chair"),
            _ => panic!("Expected OutOfStock error"),
        }
        assert_eq!(batches[0].available_quantity(), Quantity::new(1));
        assert_eq!(batches[1].available_quantity(), Quantity::new(9));
    }

    #[test]
    fn out_of_stock_with_no_batches_at_all() {
        let line = OrderLine::new("order-01", "chair", 1).unwrap();
        let err = allocate(&line, Vec::<&mut Batch>::new()).unwrap_err();
        assert!(matches!(err, DomainError::OutOfStock { .. }));
    }
}
