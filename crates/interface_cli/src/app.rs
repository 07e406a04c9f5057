//! Command execution
//!
//! [`App`] binds the configured store to every collection and turns each
//! command into page text. Prompts are injected so tests can answer them.

use serde::de::DeserializeOwned;
use std::fmt::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

use core_kernel::{CollectionPort, Currency, NumberGrouping, Record, RecordController};
use domain_inventory::{Product, StockReport};
use domain_ledger::{
    Account, AccountRegistry, BalanceSheet, CashFlowStatement, IncomeStatement, OwnersEquity,
    ReconciliationReport, ReconciliationResult, TrialBalance,
};
use domain_payroll::{Employee, EmployeeForm, PayrollRun, SalarySetup, SalarySetupForm};
use domain_sales::{Customer, CustomerForm, DocumentForm, Estimate, SalesDocument, SalesOrder};
use infra_store::{keys, JsonCollection, KeyValueStore};

use crate::cli::{
    Command, CustomerAction, CustomerArgs, DocumentAction, EmployeeAction, EmployeeArgs,
    FileAction, SalesOrderAction,
};
use crate::config::AppConfig;
use crate::error::CliError;
use crate::render;
use crate::routes::{self, Route, REDIRECTS, ROUTES};

/// Answers a yes/no question
pub type Confirm<'a> = &'a mut dyn FnMut(&str) -> bool;

/// Runs commands against one store
pub struct App {
    store: Arc<dyn KeyValueStore>,
    currency: Currency,
    grouping: NumberGrouping,
    color: bool,
}

impl App {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &AppConfig) -> Result<Self, CliError> {
        Ok(Self {
            store,
            currency: config.currency()?,
            grouping: config.grouping()?,
            color: false,
        })
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn collection<T>(&self, key: &str) -> Arc<dyn CollectionPort<T>>
    where
        T: serde::Serialize + DeserializeOwned + Send + Sync + 'static,
    {
        Arc::new(JsonCollection::<T>::new(self.store.clone(), key))
    }

    fn controller<R: Record>(&self) -> RecordController<R> {
        RecordController::new(self.collection::<R>(R::COLLECTION))
    }

    /// Executes a command and returns the text to print
    pub async fn run(&self, command: Command, confirm: Confirm<'_>) -> Result<String, CliError> {
        match command {
            Command::Open { path } => self.open(&path).await,
            Command::Routes => Ok(self.routes()),
            Command::Customer { action } => self.customer(action, confirm).await,
            Command::Employee { action } => self.employee(action, confirm).await,
            Command::Estimate { action } => self.estimate(action, confirm).await,
            Command::SalesOrder { action } => self.sales_order(action, confirm).await,
            Command::SalarySetup { action } => self.salary_setup(action, confirm).await,
            Command::Reconcile {
                beginning,
                deposits,
                payments,
                ending,
            } => {
                let result = ReconciliationResult {
                    beginning_balance: beginning,
                    cleared_deposits: deposits,
                    cleared_payments: payments,
                    ending_balance: ending,
                };
                self.reconcile(result).await
            }
        }
    }

    /// Renders the page at `path`
    pub async fn open(&self, path: &str) -> Result<String, CliError> {
        let route = routes::resolve(path)?;
        debug!(path, route = route.path(), "opening page");
        self.render_page(route).await
    }

    pub fn routes(&self) -> String {
        let mut out = String::from("Pages\n\n");
        for (path, route) in ROUTES {
            let _ = writeln!(out, "  {:<32} {}", path, route.title());
        }
        out.push_str("\nRedirects\n\n");
        for (from, to) in REDIRECTS {
            let _ = writeln!(out, "  {:<32} -> {}", from, to);
        }
        out
    }

    async fn render_page(&self, route: Route) -> Result<String, CliError> {
        let g = self.grouping;
        let page = match route {
            Route::TrialBalance => render::trial_balance(&TrialBalance::generate(&self.registry().await?), g),
            Route::BalanceSheet => render::balance_sheet(&BalanceSheet::generate(&self.registry().await?), g),
            Route::IncomeStatement => {
                render::income_statement(&IncomeStatement::generate(&self.registry().await?), g)
            }
            Route::CashFlow => render::cash_flow(&CashFlowStatement::generate(&self.registry().await?), g),
            Route::OwnersEquity => render::owners_equity(&OwnersEquity::generate(&self.registry().await?), g),
            Route::StockReport => {
                render::stock_report(&StockReport::generate(&self.products().await?, self.currency), g)
            }
            Route::BankReconciliation => self.stored_reconciliation().await?,
            Route::Products => render::products(&self.products().await?, self.currency, g),
            Route::Customers => {
                render::customers(&self.controller::<Customer>().list().await?, self.currency, g)
            }
            Route::Estimates => self.list_documents::<Estimate>(route.title(), |e| e.id.short()).await?,
            Route::SalesOrders => {
                self.list_documents::<SalesOrder>(route.title(), |o| o.id.short()).await?
            }
            Route::Employees => render::employees(&self.controller::<Employee>().list().await?),
            Route::SalarySetups => {
                render::salary_setups(&self.controller::<SalarySetup>().list().await?, self.currency, g)
            }
            Route::PayrollRun => {
                let setups = self.controller::<SalarySetup>().list().await?;
                render::payroll_run(&PayrollRun::prepare(&setups, self.currency), g)
            }
        };
        Ok(page)
    }

    /// Stored accounts, or the sample chart when none are stored
    pub async fn registry(&self) -> Result<AccountRegistry, CliError> {
        let accounts = self.collection::<Account>(keys::ACCOUNTS).load().await?;
        if accounts.is_empty() {
            debug!("no stored accounts, using sample chart");
            return Ok(AccountRegistry::sample(self.currency));
        }
        Ok(AccountRegistry::new(self.currency, accounts)?)
    }

    /// Stored products, or the sample catalogue when none are stored
    pub async fn products(&self) -> Result<Vec<Product>, CliError> {
        let products = self.collection::<Product>(keys::PRODUCTS).load().await?;
        if products.is_empty() {
            debug!("no stored products, using sample catalogue");
            return Ok(Product::samples());
        }
        Ok(products)
    }

    async fn reconcile(&self, result: ReconciliationResult) -> Result<String, CliError> {
        self.collection::<ReconciliationResult>(keys::RECONCILIATION)
            .save_all(&[result])
            .await?;
        let report = ReconciliationReport::from_result(&result, self.currency);
        info!(difference = %report.difference, "reconciliation recorded");
        Ok(render::reconciliation(&report, self.grouping, self.color))
    }

    async fn stored_reconciliation(&self) -> Result<String, CliError> {
        let stored = self
            .collection::<ReconciliationResult>(keys::RECONCILIATION)
            .load()
            .await?;
        match stored.last() {
            Some(result) => {
                let report = ReconciliationReport::from_result(result, self.currency);
                Ok(render::reconciliation(&report, self.grouping, self.color))
            }
            None => Ok(format!(
                "{}\n\nNo reconciliation result yet. Run `cloudbook reconcile` first.\n",
                Route::BankReconciliation.title()
            )),
        }
    }

    async fn list_documents<D>(&self, title: &str, id_of: impl Fn(&D) -> String) -> Result<String, CliError>
    where
        D: Record + SalesDocument,
    {
        let documents = self.controller::<D>().list().await?;
        Ok(render::documents(title, &documents, id_of, self.currency, self.grouping))
    }

    // ------------------------------------------------------------------------
    // Record commands
    // ------------------------------------------------------------------------

    async fn create<R: Record>(&self, record: R) -> Result<R, CliError> {
        let mut controller = self.controller::<R>();
        controller.begin_create()?;
        Ok(controller.save(record).await?)
    }

    async fn edit<R, F>(&self, id: R::Id, apply: F) -> Result<R, CliError>
    where
        R: Record,
        F: FnOnce(R) -> Result<R, CliError>,
    {
        let mut controller = self.controller::<R>();
        let current = controller.begin_edit(id).await?;
        let updated = apply(current)?;
        Ok(controller.save(updated).await?)
    }

    async fn delete<R: Record>(&self, id: R::Id, yes: bool, confirm: Confirm<'_>) -> Result<String, CliError> {
        let mut controller = self.controller::<R>();
        let record = controller.find(id).await?;
        controller.request_delete(record.id())?;

        if !yes && !confirm(&format!("Delete {} {}?", R::ENTITY, id)) {
            controller.cancel();
            return Ok(format!("{} {} kept\n", R::ENTITY, id));
        }

        let removed = controller.confirm_delete().await?;
        Ok(format!("Deleted {} {}\n", R::ENTITY, removed.id()))
    }

    async fn customer(&self, action: CustomerAction, confirm: Confirm<'_>) -> Result<String, CliError> {
        match action {
            CustomerAction::Add(fields) => {
                let form = customer_form(CustomerForm::default(), fields);
                let customer = self.create(form.build()).await?;
                Ok(format!("Saved customer {} ({})\n", customer.name, customer.id))
            }
            CustomerAction::Edit { id, fields } => {
                let id = parse_id(&id)?;
                let customer = self
                    .edit::<Customer, _>(id, |current| {
                        let form = customer_form(CustomerForm::from_customer(&current), fields);
                        Ok(form.apply_to(&current))
                    })
                    .await?;
                Ok(format!("Updated customer {} ({})\n", customer.name, customer.id))
            }
            CustomerAction::List => self.open(Route::Customers.path()).await,
            CustomerAction::Delete { id, yes } => self.delete::<Customer>(parse_id(&id)?, yes, confirm).await,
        }
    }

    async fn employee(&self, action: EmployeeAction, confirm: Confirm<'_>) -> Result<String, CliError> {
        match action {
            EmployeeAction::Add(fields) => {
                let form = employee_form(EmployeeForm::default(), fields);
                let employee = self.create(form.build(None)).await?;
                Ok(format!("Saved employee {} ({})\n", employee.name, employee.id))
            }
            EmployeeAction::Edit { id, fields } => {
                let id = parse_id(&id)?;
                let employee = self
                    .edit::<Employee, _>(id, |current| {
                        let form = employee_form(EmployeeForm::from_employee(&current), fields);
                        Ok(form.build(Some(current.id)))
                    })
                    .await?;
                Ok(format!("Updated employee {} ({})\n", employee.name, employee.id))
            }
            EmployeeAction::List => self.open(Route::Employees.path()).await,
            EmployeeAction::Delete { id, yes } => self.delete::<Employee>(parse_id(&id)?, yes, confirm).await,
        }
    }

    async fn estimate(&self, action: DocumentAction, confirm: Confirm<'_>) -> Result<String, CliError> {
        match action {
            DocumentAction::Add { file } => {
                let form: DocumentForm = read_form(&file).await?;
                let estimate = self.create(Estimate::from_form(&form)).await?;
                Ok(document_saved("estimate", &estimate.id.to_string(), &estimate, self.grouping))
            }
            DocumentAction::List => self.open(Route::Estimates.path()).await,
            DocumentAction::Finalize { id } => {
                let estimate = self
                    .edit::<Estimate, _>(parse_id(&id)?, |mut e| {
                        e.finalize();
                        Ok(e)
                    })
                    .await?;
                Ok(format!("Finalized estimate {}\n", estimate.id))
            }
            DocumentAction::Delete { id, yes } => self.delete::<Estimate>(parse_id(&id)?, yes, confirm).await,
        }
    }

    async fn sales_order(&self, action: SalesOrderAction, confirm: Confirm<'_>) -> Result<String, CliError> {
        let action = match action {
            SalesOrderAction::FromEstimate { estimate_id } => {
                let estimate = self.controller::<Estimate>().find(parse_id(&estimate_id)?).await?;
                let order = self.create(SalesOrder::from_estimate(&estimate)).await?;
                return Ok(document_saved("sales order", &order.id.to_string(), &order, self.grouping));
            }
            SalesOrderAction::Document(action) => action,
        };
        match action {
            DocumentAction::Add { file } => {
                let form: DocumentForm = read_form(&file).await?;
                let order = self.create(SalesOrder::from_form(&form)).await?;
                Ok(document_saved("sales order", &order.id.to_string(), &order, self.grouping))
            }
            DocumentAction::List => self.open(Route::SalesOrders.path()).await,
            DocumentAction::Finalize { id } => {
                let order = self
                    .edit::<SalesOrder, _>(parse_id(&id)?, |mut o| {
                        o.finalize();
                        Ok(o)
                    })
                    .await?;
                Ok(format!("Finalized sales order {}\n", order.id))
            }
            DocumentAction::Delete { id, yes } => self.delete::<SalesOrder>(parse_id(&id)?, yes, confirm).await,
        }
    }

    async fn salary_setup(&self, action: FileAction, confirm: Confirm<'_>) -> Result<String, CliError> {
        match action {
            FileAction::Add { file } => {
                let form: SalarySetupForm = read_form(&file).await?;
                let setup = self.create(form.build()).await?;
                Ok(format!(
                    "Saved salary setup {} for {}: gross {}, net {}\n",
                    setup.id,
                    setup.employee_name,
                    core_kernel::format_grouped(setup.gross_salary, self.grouping),
                    core_kernel::format_grouped(setup.net_payable, self.grouping),
                ))
            }
            FileAction::List => self.open(Route::SalarySetups.path()).await,
            FileAction::Delete { id, yes } => self.delete::<SalarySetup>(parse_id(&id)?, yes, confirm).await,
        }
    }
}

fn parse_id<T: FromStr>(raw: &str) -> Result<T, CliError> {
    raw.parse()
        .map_err(|_| CliError::InvalidArgument(format!("not a valid id: {}", raw)))
}

async fn read_form<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = tokio::fs::read_to_string(path).await.map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Form {
        path: path.to_path_buf(),
        source,
    })
}

fn document_saved<D: SalesDocument>(kind: &str, id: &str, document: &D, grouping: NumberGrouping) -> String {
    format!(
        "Saved {} {} for {}: {} item(s), total {}{}\n",
        kind,
        id,
        document.customer().name,
        document.items().len(),
        core_kernel::format_grouped(document.overall_total(), grouping),
        if document.is_draft() { " (draft)" } else { "" },
    )
}

fn customer_form(mut form: CustomerForm, args: CustomerArgs) -> CustomerForm {
    let CustomerArgs {
        name,
        display_name,
        company,
        email,
        phone,
        address,
        credit_limit,
        opening_balance,
        opening_balance_date,
    } = args;
    if let Some(v) = name {
        form.name = v;
    }
    if let Some(v) = display_name {
        form.display_name = v;
    }
    if let Some(v) = company {
        form.company_name = v;
    }
    if let Some(v) = email {
        form.email = v;
    }
    if let Some(v) = phone {
        form.phone = v;
    }
    if let Some(v) = address {
        form.address = v;
    }
    if let Some(v) = credit_limit {
        form.credit_limit = v;
    }
    if let Some(v) = opening_balance {
        form.opening_balance = v;
    }
    if let Some(v) = opening_balance_date {
        form.opening_balance_date = v;
    }
    form
}

fn employee_form(mut form: EmployeeForm, args: EmployeeArgs) -> EmployeeForm {
    let EmployeeArgs {
        name,
        designation,
        department,
        email,
        phone,
        joining_date,
        active,
    } = args;
    if let Some(v) = name {
        form.name = v;
    }
    if let Some(v) = designation {
        form.designation = v;
    }
    if let Some(v) = department {
        form.department = v;
    }
    if let Some(v) = email {
        form.email = v;
    }
    if let Some(v) = phone {
        form.phone = v;
    }
    if let Some(v) = joining_date {
        form.joining_date = v;
    }
    if let Some(v) = active {
        form.is_active = v;
    }
    form
}
