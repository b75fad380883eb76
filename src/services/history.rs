//! History grouping
//!
//! Turns a flat transaction list into date sections for display. Sections
//! are keyed by the exact date label and ordered newest date first; inside a
//! section the input order is kept, which for ledger lists means newest
//! added first.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, Transaction};

/// Transactions sharing one date label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryGroup<'a> {
    /// The shared label, e.g. `2025/01/15(水)`
    pub label: &'a str,
    /// Calendar date the section sorts by
    pub date: NaiveDate,
    /// Members in input order
    pub items: Vec<&'a Transaction>,
}

impl HistoryGroup<'_> {
    /// Sum of the section
    pub fn total(&self) -> Money {
        self.items.iter().map(|txn| txn.amount()).sum()
    }

    /// Number of transactions in the section
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for sections built by [`group_by_date`]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Group transactions by date label, newest date first
///
/// Returns `None` for an empty list: there is nothing to render. Two
/// transactions share a section only when their labels are identical.
/// Sections sort by the date of their first member; labels are derived from
/// dates, so every member shares it. The sort is stable, so ties keep
/// first-seen order.
pub fn group_by_date(transactions: &[Transaction]) -> Option<Vec<HistoryGroup<'_>>> {
    if transactions.is_empty() {
        return None;
    }

    let mut groups: Vec<HistoryGroup<'_>> = Vec::new();
    let mut by_label: HashMap<&str, usize> = HashMap::new();

    for txn in transactions {
        match by_label.get(txn.timestamp()).copied() {
            Some(index) => groups[index].items.push(txn),
            None => {
                by_label.insert(txn.timestamp(), groups.len());
                groups.push(HistoryGroup {
                    label: txn.timestamp(),
                    date: txn.date(),
                    items: vec![txn],
                });
            }
        }
    }

    groups.sort_by(|a, b| b.date.cmp(&a.date));
    Some(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::date::parse_label_date;
    use crate::services::LedgerStore;

    fn txn(amount: i64, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            Money::from_yen(amount),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert!(group_by_date(&[]).is_none());
    }

    #[test]
    fn test_groups_same_day_and_orders_descending() {
        let items = vec![
            txn(1500, 2025, 1, 15),
            txn(800, 2025, 1, 15),
            txn(2000, 2025, 1, 14),
        ];

        let groups = group_by_date(&items).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "2025/01/15(水)");
        assert_eq!(groups[1].label, "2025/01/14(火)");

        let first: Vec<i64> = groups[0].items.iter().map(|t| t.amount().yen()).collect();
        assert_eq!(first, vec![1500, 800]);
        assert_eq!(groups[1].items[0].amount().yen(), 2000);
    }

    #[test]
    fn test_orders_by_date_not_input_position() {
        let items = vec![
            txn(1, 2024, 12, 31),
            txn(2, 2025, 2, 1),
            txn(3, 2025, 1, 10),
            txn(4, 2024, 12, 31),
        ];

        let groups = group_by_date(&items).unwrap();
        let labels: Vec<&str> = groups.iter().map(|g| g.label).collect();

        assert_eq!(
            labels,
            vec!["2025/02/01(土)", "2025/01/10(金)", "2024/12/31(火)"]
        );
        let last: Vec<i64> = groups[2].items.iter().map(|t| t.amount().yen()).collect();
        assert_eq!(last, vec![1, 4]);
    }

    #[test]
    fn test_section_date_matches_label() {
        let items = vec![txn(1, 2025, 3, 9), txn(2, 2024, 2, 29)];
        let groups = group_by_date(&items).unwrap();

        for group in &groups {
            assert_eq!(group.date, group.items[0].date());
            assert_eq!(parse_label_date(group.label), Some(group.date));
        }
    }

    #[test]
    fn test_group_total() {
        let items = vec![txn(1500, 2025, 1, 15), txn(800, 2025, 1, 15)];
        let groups = group_by_date(&items).unwrap();

        assert_eq!(groups[0].total(), Money::from_yen(2300));
        assert_eq!(groups[0].len(), 2);
        assert!(!groups[0].is_empty());
    }

    #[test]
    fn test_store_lists_keep_newest_first_within_group() {
        let mut store = LedgerStore::new();
        store.add_expense(Money::from_yen(100), "2025-01-15").unwrap();
        store.add_expense(Money::from_yen(200), "2025-01-14").unwrap();
        store.add_expense(Money::from_yen(300), "2025-01-15").unwrap();

        let groups = group_by_date(store.expenses()).unwrap();

        assert_eq!(groups[0].label, "2025/01/15(水)");
        let amounts: Vec<i64> = groups[0].items.iter().map(|t| t.amount().yen()).collect();
        assert_eq!(amounts, vec![300, 100]);
        assert_eq!(groups[1].items.len(), 1);
    }
}
