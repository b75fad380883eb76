//! Interactive ledger session
//!
//! The ledger lives only as long as the process, so the CLI drives a single
//! `LedgerStore` through line commands read from stdin. A failing command
//! prints its error and the session carries on.

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::display::{format_history, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::export::ExportFormat;
use crate::input::TransactionForm;
use crate::models::{EntryKind, Transaction};
use crate::services::{group_by_date, LedgerStore};

/// One line typed into the session
#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "session", disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Session commands
#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Record an expense
    Expense {
        /// Amount, e.g. 1500 or ¥1,500
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Record an income
    Income {
        /// Amount, e.g. 50000 or ¥50,000
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show history grouped by date, newest first
    History {
        /// expenses or incomes (both when omitted)
        kind: Option<String>,
    },
    /// Show balance and totals
    Summary,
    /// Write a snapshot of the ledger
    Export {
        /// json, yaml or csv
        #[arg(short, long)]
        format: Option<String>,
    },
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// What the session loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Quit,
}

/// A ledger session: one store plus the entry form feeding it
#[derive(Debug)]
pub struct Session {
    store: LedgerStore,
    form: TransactionForm,
    settings: Settings,
}

impl Session {
    /// Start a session with an empty ledger
    pub fn new(settings: Settings) -> Self {
        Self {
            store: LedgerStore::new(),
            form: TransactionForm::new(),
            settings,
        }
    }

    /// The ledger built so far
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Read commands from `input` until it ends or `quit` is entered
    ///
    /// With `prompt` set a `> ` prompt is written before each line.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        prompt: bool,
    ) -> LedgerResult<()> {
        info!("session started");
        let mut buf = Vec::new();
        loop {
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim_end_matches(&['\n', '\r'][..]),
                Err(err) => {
                    warn!(error = %err, "skipping undecodable input line");
                    writeln!(out, "Error: input line is not valid UTF-8 ({})", err)?;
                    continue;
                }
            };

            match self.execute(line, out) {
                Ok(SessionControl::Quit) => break,
                Ok(SessionControl::Continue) => {}
                Err(err) => writeln!(out, "Error: {}", err)?,
            }
        }
        info!(transactions = self.store.len(), "session ended");
        Ok(())
    }

    /// Execute a single command line
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> LedgerResult<SessionControl> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() || words[0].starts_with('#') {
            return Ok(SessionControl::Continue);
        }
        debug!(line, "session command");

        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                    write!(out, "{}", err.render())?;
                    return Ok(SessionControl::Continue);
                }
                return Err(LedgerError::Command(
                    err.render().to_string().trim_end().to_string(),
                ));
            }
        };

        match parsed.command {
            SessionCommand::Expense { amount, date } => {
                let txn = self.record(EntryKind::Expense, &amount, date)?;
                writeln!(out, "{}", format_recorded(EntryKind::Expense, &txn))?;
            }
            SessionCommand::Income { amount, date } => {
                let txn = self.record(EntryKind::Income, &amount, date)?;
                writeln!(out, "{}", format_recorded(EntryKind::Income, &txn))?;
            }
            SessionCommand::History { kind } => {
                let kinds = match kind {
                    Some(kind) => vec![kind.parse::<EntryKind>()?],
                    None => vec![EntryKind::Expense, EntryKind::Income],
                };
                self.write_history(&kinds, out)?;
            }
            SessionCommand::Summary => {
                write!(out, "{}", format_summary(&self.store.summary()))?;
            }
            SessionCommand::Export { format } => {
                let format = match format {
                    Some(format) => format.parse::<ExportFormat>()?,
                    None => self.settings.default_export_format,
                };
                format.write(&self.store, out)?;
            }
            SessionCommand::Quit => return Ok(SessionControl::Quit),
        }

        Ok(SessionControl::Continue)
    }

    fn record(
        &mut self,
        kind: EntryKind,
        amount: &str,
        date: Option<String>,
    ) -> LedgerResult<Transaction> {
        self.form.amount_field_mut().handle_change(amount);
        match date {
            Some(date) => {
                self.form.set_use_custom_date(true);
                self.form.set_date(date);
            }
            None => self.form.set_use_custom_date(false),
        }

        let result = self.form.submit(&mut self.store, kind);
        if result.is_err() {
            // a rejected entry must not linger into the next command
            self.form.amount_field_mut().clear();
        }
        result
    }

    fn write_history<W: Write>(&self, kinds: &[EntryKind], out: &mut W) -> LedgerResult<()> {
        let mut wrote_any = false;
        for kind in kinds {
            let groups = group_by_date(self.store.transactions(*kind));
            let text = format_history(kind.plural(), groups.as_deref(), self.settings.history_limit);
            if text.is_empty() {
                continue;
            }
            if wrote_any {
                writeln!(out)?;
            }
            write!(out, "{}", text)?;
            wrote_any = true;
        }
        if !wrote_any {
            writeln!(out, "No transactions recorded.")?;
        }
        Ok(())
    }
}

fn format_recorded(kind: EntryKind, txn: &Transaction) -> String {
    format!(
        "Recorded {} {} on {} ({})",
        kind,
        txn.amount(),
        txn.timestamp(),
        txn.id().short()
    )
}
