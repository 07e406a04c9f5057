//! Command line definitions

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Small-business bookkeeping from the terminal
#[derive(Parser, Debug)]
#[command(name = "cloudbook", version, about = "Easy CloudBook bookkeeping")]
pub struct Cli {
    /// Configuration file (defaults to ./cloudbook.toml when present)
    #[arg(long, env = "CLOUDBOOK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Overrides the configured data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disables coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Opens a page by path, following index redirects
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Lists every page and redirect
    Routes,
    /// Manages customers
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Manages employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },
    /// Manages estimates
    Estimate {
        #[command(subcommand)]
        action: DocumentAction,
    },
    /// Manages sales orders
    SalesOrder {
        #[command(subcommand)]
        action: SalesOrderAction,
    },
    /// Manages salary setups
    SalarySetup {
        #[command(subcommand)]
        action: FileAction,
    },
    /// Prints a bank reconciliation report and keeps it for the report page
    Reconcile {
        #[arg(long, allow_hyphen_values = true)]
        beginning: Decimal,
        #[arg(long, default_value = "0")]
        deposits: Decimal,
        #[arg(long, default_value = "0")]
        payments: Decimal,
        #[arg(long, allow_hyphen_values = true)]
        ending: Decimal,
    },
}

/// Customer form fields; unset fields stay empty on add and unchanged on edit
#[derive(Args, Debug, Default, Clone)]
pub struct CustomerArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub display_name: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub credit_limit: Option<String>,
    /// Ignored on edit
    #[arg(long)]
    pub opening_balance: Option<String>,
    /// YYYY-MM-DD; ignored on edit
    #[arg(long)]
    pub opening_balance_date: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum CustomerAction {
    Add(CustomerArgs),
    Edit {
        id: String,
        #[command(flatten)]
        fields: CustomerArgs,
    },
    List,
    Delete {
        id: String,
        /// Skips the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

/// Employee form fields
#[derive(Args, Debug, Default, Clone)]
pub struct EmployeeArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub designation: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub joining_date: Option<String>,
    /// true or false
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum EmployeeAction {
    Add(EmployeeArgs),
    Edit {
        id: String,
        #[command(flatten)]
        fields: EmployeeArgs,
    },
    List,
    Delete {
        id: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DocumentAction {
    /// Adds a document from a JSON form file
    Add {
        #[arg(long)]
        file: PathBuf,
    },
    List,
    /// Clears the draft flag
    Finalize { id: String },
    Delete {
        id: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SalesOrderAction {
    /// Creates a draft order from an estimate's customer and items
    FromEstimate { estimate_id: String },
    #[command(flatten)]
    Document(DocumentAction),
}

#[derive(Subcommand, Debug)]
pub enum FileAction {
    /// Adds a record from a JSON form file
    Add {
        #[arg(long)]
        file: PathBuf,
    },
    List,
    Delete {
        id: String,
        #[arg(long, short)]
        yes: bool,
    },
}
