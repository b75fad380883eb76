//! Balance and totals display

use crate::services::LedgerSummary;

/// Format the balance with total income and total expense
pub fn format_summary(summary: &LedgerSummary<'_>) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<16} {:>19}\n", "Balance", summary.balance.display()));
    output.push_str(&"-".repeat(36));
    output.push('\n');
    output.push_str(&format!(
        "{:<16} {:>19}  ({} entries)\n",
        "Total income",
        summary.total_income_amount.display(),
        summary.incomes.len()
    ));
    output.push_str(&format!(
        "{:<16} {:>19}  ({} entries)\n",
        "Total expense",
        summary.total_expense_amount.display(),
        summary.expenses.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::INVALID_AMOUNT_LABEL;
    use crate::models::Money;
    use crate::services::LedgerStore;

    #[test]
    fn test_empty_summary_shows_zero() {
        let store = LedgerStore::new();
        let output = format_summary(&store.summary());

        assert!(output.contains("Balance"));
        assert!(output.contains("¥0"));
        assert!(output.contains("(0 entries)"));
    }

    #[test]
    fn test_summary_values() {
        let mut store = LedgerStore::new();
        store.add_income(Money::from_yen(50000), "2025-01-01").unwrap();
        store.add_expense(Money::from_yen(1500), "2025-01-02").unwrap();

        let output = format_summary(&store.summary());

        assert!(output.contains("¥48,500"));
        assert!(output.contains("¥50,000"));
        assert!(output.contains("¥1,500"));
    }

    #[test]
    fn test_out_of_range_total_degrades_to_label() {
        let mut store = LedgerStore::with_validation(false);
        store.add_income(Money::from_yen(i64::MAX), "2025-01-01").unwrap();

        let output = format_summary(&store.summary());

        assert!(output.contains(INVALID_AMOUNT_LABEL));
    }
}
