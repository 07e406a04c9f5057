//! Text rendering of report pages and list views
//!
//! Calculators produce typed results; everything here only lays them out.
//! Amount columns use grouped formatting without a currency symbol, and the
//! currency code appears once in the page heading.

use std::fmt::Write;

use core_kernel::{format_grouped, Currency, Money, NumberGrouping};
use domain_inventory::{Product, ProductType, StockReport};
use domain_ledger::{
    BalanceSheet, BalanceSheetLine, CashFlowStatement, DifferenceStyle, IncomeStatement,
    OwnersEquity, ReconciliationReport, TrialBalance,
};
use domain_payroll::{Employee, PayrollRun, SalarySetup};
use domain_sales::{Customer, SalesDocument};

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A plain-text table with a header rule
pub struct Table {
    headers: Vec<(String, Align)>,
    rows: Vec<Option<Vec<String>>>,
}

impl Table {
    pub fn new(headers: &[(&str, Align)]) -> Self {
        Self {
            headers: headers.iter().map(|(h, a)| (h.to_string(), *a)).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(Some(cells));
    }

    /// A horizontal rule, used above totals
    pub fn rule(&mut self) {
        self.rows.push(None);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Option::is_none)
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|(h, _)| h.chars().count()).collect();
        for cells in self.rows.iter().flatten() {
            for (i, cell) in cells.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let total_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let mut out = String::new();
        let header: Vec<String> = self.headers.iter().map(|(h, _)| h.clone()).collect();
        self.write_line(&mut out, &header, &widths);
        out.push_str(&"-".repeat(total_width));
        out.push('\n');
        for row in &self.rows {
            match row {
                Some(cells) => self.write_line(&mut out, cells, &widths),
                None => {
                    out.push_str(&"-".repeat(total_width));
                    out.push('\n');
                }
            }
        }
        out
    }

    fn write_line(&self, out: &mut String, cells: &[String], widths: &[usize]) {
        let mut parts = Vec::with_capacity(widths.len());
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell.chars().count());
            let part = match self.headers[i].1 {
                Align::Left => format!("{}{}", cell, " ".repeat(pad)),
                Align::Right => format!("{}{}", " ".repeat(pad), cell),
            };
            parts.push(part);
        }
        out.push_str(parts.join("  ").trim_end());
        out.push('\n');
    }
}

fn heading(title: &str, currency: Currency) -> String {
    format!("{} ({})\n\n", title, currency.code())
}

fn amount(money: &Money, grouping: NumberGrouping) -> String {
    format_grouped(money.amount(), grouping)
}

fn blank_if_zero(money: &Money, grouping: NumberGrouping) -> String {
    if money.is_zero() {
        String::new()
    } else {
        amount(money, grouping)
    }
}

pub fn trial_balance(tb: &TrialBalance, grouping: NumberGrouping) -> String {
    let mut table = Table::new(&[
        ("Account", Align::Left),
        ("Type", Align::Left),
        ("Debit", Align::Right),
        ("Credit", Align::Right),
    ]);
    for row in &tb.rows {
        table.row(vec![
            row.name.clone(),
            row.account_type.label().to_string(),
            blank_if_zero(&row.debit, grouping),
            blank_if_zero(&row.credit, grouping),
        ]);
    }
    table.rule();
    table.row(vec![
        "Total".to_string(),
        String::new(),
        amount(&tb.total_debit, grouping),
        amount(&tb.total_credit, grouping),
    ]);

    let mut out = heading("Trial Balance", tb.total_debit.currency());
    out.push_str(&table.render());
    if let Some(warning) = tb.imbalance_warning() {
        let _ = write!(out, "\nWarning: {}\n", warning);
    }
    out
}

pub fn owners_equity(equity: &OwnersEquity, grouping: NumberGrouping) -> String {
    let mut table = Table::new(&[("", Align::Left), ("Amount", Align::Right)]);
    table.row(vec!["Beginning Capital".to_string(), amount(&equity.beginning_capital, grouping)]);
    table.row(vec!["Add: Net Income".to_string(), amount(&equity.net_income, grouping)]);
    table.row(vec!["Less: Drawings".to_string(), amount(&equity.drawings, grouping)]);
    table.rule();
    table.row(vec!["Ending Capital".to_string(), amount(&equity.ending_capital, grouping)]);

    let mut out = heading("Statement of Owner's Equity", equity.ending_capital.currency());
    out.push_str(&table.render());
    out
}

pub fn cash_flow(cf: &CashFlowStatement, grouping: NumberGrouping) -> String {
    let mut table = Table::new(&[("", Align::Left), ("Amount", Align::Right)]);
    table.row(vec!["Net cash from operating activities".to_string(), amount(&cf.operating, grouping)]);
    for line in &cf.investing_lines {
        table.row(vec![format!("  {}", line.label), amount(&line.amount, grouping)]);
    }
    table.row(vec!["Net cash from investing activities".to_string(), amount(&cf.investing, grouping)]);
    for line in &cf.financing_lines {
        table.row(vec![format!("  {}", line.label), amount(&line.amount, grouping)]);
    }
    table.row(vec!["Net cash from financing activities".to_string(), amount(&cf.financing, grouping)]);
    table.rule();
    table.row(vec!["Net change in cash".to_string(), amount(&cf.net_change, grouping)]);
    table.row(vec!["Beginning cash".to_string(), amount(&cf.beginning_cash, grouping)]);
    table.row(vec!["Ending cash".to_string(), amount(&cf.ending_cash, grouping)]);

    let mut out = heading("Cash Flow Statement", cf.net_change.currency());
    out.push_str(&table.render());
    out
}

pub fn income_statement(statement: &IncomeStatement, grouping: NumberGrouping) -> String {
    let mut table = Table::new(&[("", Align::Left), ("Amount", Align::Right)]);
    table.row(vec!["Revenue".to_string(), amount(&statement.gross_revenue, grouping)]);
    table.row(vec!["Less: Returns and allowances".to_string(), amount(&statement.contra_income, grouping)]);
    table.row(vec!["Net revenue".to_string(), amount(&statement.net_revenue, grouping)]);
    table.row(vec!["Expenses".to_string(), amount(&statement.gross_expenses, grouping)]);
    table.row(vec!["Add: Contra expenses".to_string(), amount(&statement.contra_expenses, grouping)]);
    table.row(vec!["Net expenses".to_string(), amount(&statement.net_expenses, grouping)]);
    table.rule();
    table.row(vec!["Net income".to_string(), amount(&statement.net_income, grouping)]);

    let mut out = heading("Income Statement", statement.net_income.currency());
    out.push_str(&table.render());
    out
}

pub fn balance_sheet(sheet: &BalanceSheet, grouping: NumberGrouping) -> String {
    let mut table = Table::new(&[("", Align::Left), ("Amount", Align::Right)]);
    let mut section = |title: &str, lines: &[BalanceSheetLine], total: &Money| {
        table.row(vec![title.to_string(), String::new()]);
        for line in lines {
            table.row(vec![format!("  {}", line.name), amount(&line.amount, grouping)]);
        }
        table.row(vec![format!("Total {}", title), amount(total, grouping)]);
    };
    section("Assets", &sheet.assets, &sheet.total_assets);
    section("Liabilities", &sheet.liabilities, &sheet.total_liabilities);
    section("Equity", &sheet.equity, &sheet.total_equity);

    let mut out = heading("Balance Sheet", sheet.total_assets.currency());
    out.push_str(&table.render());
    if !sheet.is_balanced() {
        let _ = write!(
            out,
            "\nWarning: assets differ from liabilities and equity by {}\n",
            amount(&sheet.difference(), grouping)
        );
    }
    out
}

pub fn stock_report(report: &StockReport, grouping: NumberGrouping) -> String {
    let mut table = Table::new(&[
        ("Product", Align::Left),
        ("Unit", Align::Left),
        ("Quantity", Align::Right),
        ("Cost", Align::Right),
        ("Value", Align::Right),
    ]);
    for row in &report.rows {
        table.row(vec![
            row.name.clone(),
            row.unit.clone().unwrap_or_default(),
            row.quantity_display(grouping),
            amount(&row.costing_price, grouping),
            row.value_display(grouping),
        ]);
    }
    table.rule();
    table.row(vec![
        "Total".to_string(),
        String::new(),
        report.total_quantity_display(grouping),
        String::new(),
        report.total_value_display(grouping),
    ]);

    let mut out = heading("Stock Report", report.total_value.currency());
    out.push_str(&table.render());
    out
}

/// Terminal colour name for the difference line
pub fn difference_color(style: DifferenceStyle) -> &'static str {
    match style {
        DifferenceStyle::Balanced => "green",
        DifferenceStyle::OutOfBalance => "red",
    }
}

pub fn reconciliation(report: &ReconciliationReport, grouping: NumberGrouping, color: bool) -> String {
    let mut table = Table::new(&[("", Align::Left), ("Amount", Align::Right)]);
    table.row(vec!["Beginning balance".to_string(), amount(&report.beginning_balance, grouping)]);
    table.row(vec!["Add: Cleared deposits".to_string(), amount(&report.cleared_deposits, grouping)]);
    table.row(vec!["Less: Cleared payments".to_string(), amount(&report.cleared_payments, grouping)]);
    table.rule();
    table.row(vec!["Cleared balance".to_string(), amount(&report.cleared_balance, grouping)]);
    table.row(vec!["Statement ending balance".to_string(), amount(&report.ending_balance, grouping)]);

    let mut out = heading("Bank Reconciliation Report", report.difference.currency());
    out.push_str(&table.render());

    let difference = report.difference_display(grouping);
    let difference = if color {
        let code = match report.style {
            DifferenceStyle::Balanced => "32",
            DifferenceStyle::OutOfBalance => "31",
        };
        format!("\x1b[{}m{}\x1b[0m", code, difference)
    } else {
        difference
    };
    let _ = writeln!(out, "\nDifference: {} ({})", difference, difference_color(report.style));
    out
}

fn empty_or(table: Table, title: &str, currency: Option<Currency>) -> String {
    let mut out = match currency {
        Some(currency) => heading(title, currency),
        None => format!("{}\n\n", title),
    };
    if table.is_empty() {
        let _ = writeln!(out, "No records yet.");
    } else {
        out.push_str(&table.render());
    }
    out
}

pub fn products(products: &[Product], currency: Currency, grouping: NumberGrouping) -> String {
    let mut table = Table::new(&[
        ("Name", Align::Left),
        ("Type", Align::Left),
        ("Units", Align::Left),
        ("Cost", Align::Right),
        ("Price", Align::Right),
    ]);
    for product in products {
        let kind = match product.product_type {
            ProductType::Stock => "Stock",
            ProductType::Service => "Service",
        };
        let units: Vec<&str> = product.units.iter().map(|u| u.name.as_str()).collect();
        table.row(vec![
            product.name.clone(),
            kind.to_string(),
            units.join(", "),
            format_grouped(product.costing_price, grouping),
            format_grouped(product.sales_price, grouping),
        ]);
    }
    empty_or(table, "Products", Some(currency))
}

pub fn customers(customers: &[Customer], currency: Currency, grouping: NumberGrouping) -> String {
    let mut table = Table::new(&[
        ("Id", Align::Left),
        ("Name", Align::Left),
        ("Company", Align::Left),
        ("Phone", Align::Left),
        ("Credit Limit", Align::Right),
        ("Opening Balance", Align::Right),
    ]);
    for customer in customers {
        table.row(vec![
            customer.id.to_string(),
            customer.label().to_string(),
            customer.company_name.clone(),
            customer.phone.clone(),
            format_grouped(customer.credit_limit, grouping),
            format_grouped(customer.opening_balance, grouping),
        ]);
    }
    empty_or(table, "Customers", Some(currency))
}

/// Estimates or sales orders; `id_of` supplies the displayed id
pub fn documents<D: SalesDocument>(
    title: &str,
    documents: &[D],
    id_of: impl Fn(&D) -> String,
    currency: Currency,
    grouping: NumberGrouping,
) -> String {
    let mut table = Table::new(&[
        ("Id", Align::Left),
        ("Customer", Align::Left),
        ("Items", Align::Right),
        ("Total", Align::Right),
        ("Status", Align::Left),
    ]);
    for document in documents {
        table.row(vec![
            id_of(document),
            document.customer().name.clone(),
            document.items().len().to_string(),
            format_grouped(document.overall_total(), grouping),
            if document.is_draft() { "Draft" } else { "Final" }.to_string(),
        ]);
    }
    let committed = domain_sales::committed_total(documents);
    let mut out = empty_or(table, title, Some(currency));
    if !documents.is_empty() {
        let _ = writeln!(out, "\nCommitted total: {}", format_grouped(committed, grouping));
    }
    out
}

pub fn employees(employees: &[Employee]) -> String {
    let mut table = Table::new(&[
        ("Id", Align::Left),
        ("Name", Align::Left),
        ("Designation", Align::Left),
        ("Department", Align::Left),
        ("Joined", Align::Left),
        ("Status", Align::Left),
    ]);
    for employee in employees {
        table.row(vec![
            employee.id.to_string(),
            employee.name.clone(),
            employee.designation.clone(),
            employee.department.clone(),
            employee.joining_date.map(|d| d.to_string()).unwrap_or_default(),
            if employee.is_active { "Active" } else { "Inactive" }.to_string(),
        ]);
    }
    empty_or(table, "Employees", None)
}

pub fn salary_setups(setups: &[SalarySetup], currency: Currency, grouping: NumberGrouping) -> String {
    let mut table = Table::new(&[
        ("Id", Align::Left),
        ("Employee", Align::Left),
        ("Basic", Align::Right),
        ("Gross", Align::Right),
        ("Net Payable", Align::Right),
        ("Payment", Align::Left),
        ("Status", Align::Left),
    ]);
    for setup in setups {
        table.row(vec![
            setup.id.to_string(),
            setup.employee_name.clone(),
            format_grouped(setup.basic_salary, grouping),
            format_grouped(setup.gross_salary, grouping),
            format_grouped(setup.net_payable, grouping),
            setup.payment_mode.to_string(),
            if setup.is_active { "Active" } else { "Inactive" }.to_string(),
        ]);
    }
    empty_or(table, "Salary Setup", Some(currency))
}

pub fn payroll_run(run: &PayrollRun, grouping: NumberGrouping) -> String {
    let mut table = Table::new(&[
        ("Employee", Align::Left),
        ("Gross", Align::Right),
        ("Deductions", Align::Right),
        ("Net", Align::Right),
        ("Employer PF", Align::Right),
        ("Payment", Align::Left),
    ]);
    for line in &run.lines {
        table.row(vec![
            line.employee_name.clone(),
            amount(&line.gross, grouping),
            amount(&line.deductions, grouping),
            amount(&line.net, grouping),
            amount(&line.employer_contribution, grouping),
            line.payment_mode.to_string(),
        ]);
    }
    if !run.lines.is_empty() {
        table.rule();
        table.row(vec![
            "Total".to_string(),
            amount(&run.total_gross, grouping),
            amount(&run.total_deductions, grouping),
            amount(&run.total_net, grouping),
            amount(&run.total_employer_contribution, grouping),
            String::new(),
        ]);
    }
    empty_or(table, "Payroll Run", Some(run.total_gross.currency()))
}
