//! Interactive menu session
//!
//! Drives one [`BudgetEngine`] from a numbered menu. Input collection and
//! rendering live here; every bookkeeping decision is left to the engine.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::prompt::Prompter;
use crate::display::{
    format_category_list, format_category_menu, format_limit, format_notification_list,
    format_totals, format_transaction_register,
};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_session, ExportFormat};
use crate::services::BudgetEngine;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    ViewTransactions,
    SetBudgetLimits,
    ViewNotifications,
    ViewCategories,
    Summary,
    Export,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub fn all() -> &'static [Self] {
        &[
            Self::AddIncome,
            Self::AddExpense,
            Self::ViewTransactions,
            Self::SetBudgetLimits,
            Self::ViewNotifications,
            Self::ViewCategories,
            Self::Summary,
            Self::Export,
            Self::Exit,
        ]
    }

    /// Map a 1-based menu number to an entry
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::all().get(i))
            .copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddIncome => "Add Income",
            Self::AddExpense => "Add Expense",
            Self::ViewTransactions => "View Transactions",
            Self::SetBudgetLimits => "Set Budget Limits",
            Self::ViewNotifications => "View Notifications",
            Self::ViewCategories => "View Categories",
            Self::Summary => "Summary",
            Self::Export => "Export",
            Self::Exit => "Exit",
        }
    }
}

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// One interactive session over an engine
pub struct Session<R, W> {
    engine: BudgetEngine,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(engine: BudgetEngine, input: R, output: W) -> Self {
        Self {
            engine,
            prompter: Prompter::new(input, output),
        }
    }

    /// The engine driven by this session
    pub fn engine(&self) -> &BudgetEngine {
        &self.engine
    }

    /// Consume the session, returning the engine
    pub fn into_engine(self) -> BudgetEngine {
        self.engine
    }

    /// Run the menu loop until Exit is chosen or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        info!("Session started");
        loop {
            self.print_menu()?;
            let Some(number) = self.prompter.prompt_number("Choose an option: ")? else {
                break;
            };

            let flow = match MenuChoice::from_number(number) {
                Some(choice) => {
                    debug!(?choice, "Menu selection");
                    self.handle(choice)?
                }
                None => {
                    self.say("Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                break;
            }
        }
        info!(
            transactions = self.engine.list_transactions().len(),
            "Session ended"
        );
        Ok(())
    }

    fn print_menu(&mut self) -> TrackerResult<()> {
        let out = self.prompter.output();
        writeln!(out)?;
        for (i, choice) in MenuChoice::all().iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    fn say(&mut self, message: impl AsRef<str>) -> TrackerResult<()> {
        writeln!(self.prompter.output(), "{}", message.as_ref())?;
        Ok(())
    }

    fn handle(&mut self, choice: MenuChoice) -> TrackerResult<Flow> {
        match choice {
            MenuChoice::AddIncome => self.add_income(),
            MenuChoice::AddExpense => self.add_expense(),
            MenuChoice::ViewTransactions => {
                let register = format_transaction_register(
                    self.engine.list_transactions(),
                    &self.engine.settings().currency_symbol,
                );
                write!(self.prompter.output(), "{}", register)?;
                Ok(Flow::Continue)
            }
            MenuChoice::SetBudgetLimits => self.set_budget_limits(),
            MenuChoice::ViewNotifications => {
                let list = format_notification_list(
                    self.engine.list_notifications(),
                    &self.engine.settings().date_format,
                );
                write!(self.prompter.output(), "{}", list)?;
                Ok(Flow::Continue)
            }
            MenuChoice::ViewCategories => {
                let list = format_category_list(
                    self.engine.list_categories(),
                    &self.engine.settings().currency_symbol,
                );
                write!(self.prompter.output(), "{}", list)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Summary => {
                let summary =
                    format_totals(&self.engine.totals(), &self.engine.settings().currency_symbol);
                write!(self.prompter.output(), "{}", summary)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Export => self.export(),
            MenuChoice::Exit => {
                self.say("Exiting. Goodbye!")?;
                Ok(Flow::Stop)
            }
        }
    }

    fn add_income(&mut self) -> TrackerResult<Flow> {
        let Some(amount) = self.prompter.prompt_amount("Enter income amount: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(description) = self.prompter.prompt_string("Enter income description: ")? else {
            return Ok(Flow::Stop);
        };

        match self.engine.record_income(amount, &description) {
            Ok(_) => self.say("Income added successfully!")?,
            Err(e) => self.say(format!("Income not recorded: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn add_expense(&mut self) -> TrackerResult<Flow> {
        let Some(amount) = self.prompter.prompt_amount("Enter expense amount: ")? else {
            return Ok(Flow::Stop);
        };

        let menu = format_category_menu(self.engine.list_categories());
        write!(self.prompter.output(), "Select category:\n{}", menu)?;
        let Some(selection) = self.prompter.prompt_number("Category: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(index) = selection
            .checked_sub(1)
            .filter(|&i| self.engine.category(i).is_some())
        else {
            self.say("Invalid category. Expense not recorded.")?;
            return Ok(Flow::Continue);
        };
        let Some(description) = self.prompter.prompt_string("Enter expense description: ")? else {
            return Ok(Flow::Stop);
        };

        let result = self.engine.record_expense(index, amount, &description);
        match result {
            Ok(outcome) => {
                if outcome.budget_exceeded {
                    let name = self
                        .engine
                        .list_transactions()
                        .last()
                        .map(|t| t.category_name.clone())
                        .unwrap_or_default();
                    self.say(format!("Warning: You exceeded the budget for {}!", name))?;
                }
                self.say("Expense added successfully!")?;
            }
            Err(e) => self.say(format!("Expense not recorded: {}", e))?,
        }
        Ok(Flow::Continue)
    }

    fn set_budget_limits(&mut self) -> TrackerResult<Flow> {
        self.say("Set budget limits for categories:")?;
        let symbol = self.engine.settings().currency_symbol.clone();

        for index in 0..self.engine.list_categories().len() {
            let Some(category) = self.engine.category(index) else {
                continue;
            };
            let line = format!(
                "{}: Current limit {}",
                category.name,
                format_limit(category, &symbol)
            );
            self.say(line)?;

            let Some(limit) = self
                .prompter
                .prompt_amount("Enter new budget limit (0 for no limit): ")?
            else {
                return Ok(Flow::Stop);
            };
            if let Err(e) = self.engine.set_category_limit(index, limit) {
                self.say(format!("Limit unchanged: {}", e))?;
            }
        }

        self.say("Budget limits updated.")?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> TrackerResult<Flow> {
        let Some(path) = self
            .prompter
            .prompt_string("Enter export file path (.csv, .json or .yaml): ")?
        else {
            return Ok(Flow::Stop);
        };

        let path = PathBuf::from(path.trim());
        if path.as_os_str().is_empty() {
            self.say("Export cancelled.")?;
            return Ok(Flow::Continue);
        }

        let Some(format) = ExportFormat::from_path(&path) else {
            self.say("Unknown export format. Use a .csv, .json or .yaml file.")?;
            return Ok(Flow::Continue);
        };

        match write_export(&self.engine, format, &path) {
            Ok(()) => {
                info!(path = %path.display(), %format, "Session exported");
                self.say(format!("Exported {} to {}", format, path.display()))?;
            }
            Err(e) => self.say(format!("Export failed: {}", e))?,
        }
        Ok(Flow::Continue)
    }
}

fn write_export(engine: &BudgetEngine, format: ExportFormat, path: &Path) -> TrackerResult<()> {
    let file = File::create(path)
        .map_err(|e| TrackerError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);
    export_session(engine, format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
