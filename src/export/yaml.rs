//! YAML Export functionality
//!
//! Writes the ledger snapshot as human-readable YAML.

use std::io::Write;

use crate::error::LedgerResult;
use crate::export::json::LedgerExport;
use crate::services::LedgerStore;

/// Export the ledger to YAML with a short header comment
pub fn export_yaml<W: Write>(store: &LedgerStore, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_store(store);

    writeln!(writer, "# kakeibo ledger export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_yaml_export() {
        let mut store = LedgerStore::new();
        store.add_expense(Money::from_yen(800), "2025-01-15").unwrap();

        let mut output = Vec::new();
        export_yaml(&store, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# kakeibo ledger export"));
        assert!(text.contains("total_expense_amount: 800"));
        assert!(text.contains("2025/01/15(水)"));

        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["balance"].as_i64(), Some(-800));
    }
}
