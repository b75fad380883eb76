//! History display formatting
//!
//! Renders date sections produced by [`crate::services::group_by_date`].
//! Rendering only lays out what it is given; grouping and ordering are
//! decided before this point.

use crate::services::HistoryGroup;

const RULE_WIDTH: usize = 36;

/// Format one transaction line inside a section
fn format_item_row(id: &str, amount: &str) -> String {
    format!("  {:<14} {:>19}\n", id, amount)
}

/// Format a titled history list
///
/// `None` (an empty list) renders nothing at all. `limit` caps the number of
/// date sections shown; a note reports how many were left out.
pub fn format_history(
    title: &str,
    groups: Option<&[HistoryGroup<'_>]>,
    limit: Option<usize>,
) -> String {
    let Some(groups) = groups else {
        return String::new();
    };

    let shown = limit.unwrap_or(groups.len()).min(groups.len());

    let mut output = String::new();
    output.push_str(title);
    output.push('\n');
    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push('\n');

    for (index, group) in groups.iter().take(shown).enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{:<16} {:>19}\n",
            group.label,
            group.total().display()
        ));
        for txn in &group.items {
            output.push_str(&format_item_row(&txn.id().short(), &txn.amount().display()));
        }
    }

    let hidden = groups.len() - shown;
    if hidden > 0 {
        output.push_str(&format!("\n... {} older day(s) not shown\n", hidden));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::{group_by_date, LedgerStore};

    #[test]
    fn test_empty_history_renders_nothing() {
        assert_eq!(format_history("Expenses", None, None), "");
    }

    #[test]
    fn test_sections_in_order() {
        let mut store = LedgerStore::new();
        store.add_expense(Money::from_yen(2000), "2025-01-14").unwrap();
        store.add_expense(Money::from_yen(800), "2025-01-15").unwrap();
        store.add_expense(Money::from_yen(1500), "2025-01-15").unwrap();

        let groups = group_by_date(store.expenses());
        let output = format_history("Expenses", groups.as_deref(), None);

        assert!(output.starts_with("Expenses\n"));
        let newer = output.find("2025/01/15(水)").unwrap();
        let older = output.find("2025/01/14(火)").unwrap();
        assert!(newer < older);
        assert!(output.contains("¥2,300"));
        let first_item = output.find("¥1,500").unwrap();
        let second_item = output.find("¥800").unwrap();
        assert!(first_item < second_item);
    }

    #[test]
    fn test_limit_hides_older_sections() {
        let mut store = LedgerStore::new();
        store.add_income(Money::from_yen(1), "2025-01-01").unwrap();
        store.add_income(Money::from_yen(2), "2025-01-02").unwrap();
        store.add_income(Money::from_yen(3), "2025-01-03").unwrap();

        let groups = group_by_date(store.incomes());
        let output = format_history("Incomes", groups.as_deref(), Some(1));

        assert!(output.contains("2025/01/03"));
        assert!(!output.contains("2025/01/01"));
        assert!(output.contains("2 older day(s) not shown"));
    }
}
