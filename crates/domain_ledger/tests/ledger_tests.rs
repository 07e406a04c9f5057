//! Report calculator tests for domain_ledger

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Currency;
use domain_ledger::{
    AccountRegistry, AccountType, BalanceSheet, CashFlowStatement, DifferenceStyle,
    IncomeStatement, OwnersEquity, ReconciliationReport, TrialBalance,
};
use test_utils::{
    accounts_strategy, assert_balance_sheet_balanced, assert_money_eq, assert_money_zero,
    assert_single_column_rows, assert_trial_balance_balanced, AccountFixtures, MoneyFixtures,
    ReconciliationFixtures, TestRegistryBuilder,
};

// ============================================================================
// Trial Balance Tests
// ============================================================================

mod trial_balance_tests {
    use super::*;

    #[test]
    fn test_sample_chart_balances() {
        let tb = TrialBalance::generate(&AccountFixtures::sample_registry());

        assert_trial_balance_balanced(&tb);
        assert_single_column_rows(&tb);
        assert_money_eq(&tb.total_debit, dec!(1090000));
        assert!(tb.imbalance_warning().is_none());
    }

    #[test]
    fn test_single_asset_goes_to_debit() {
        let registry = TestRegistryBuilder::new()
            .with_account("Cash", AccountType::Asset, dec!(100))
            .build();

        let tb = TrialBalance::generate(&registry);

        assert_money_eq(&tb.rows[0].debit, dec!(100));
        assert_money_zero(&tb.rows[0].credit);
    }

    #[test]
    fn test_rows_carry_registry_currency() {
        let registry = TestRegistryBuilder::new()
            .with_currency(Currency::USD)
            .with_account("Cash", AccountType::Asset, dec!(75))
            .with_account("Sales", AccountType::Income, dec!(75))
            .build();

        let tb = TrialBalance::generate(&registry);

        assert_eq!(tb.total_debit.currency(), Currency::USD);
        assert_eq!(tb.rows[1].credit.currency(), Currency::USD);
        assert_trial_balance_balanced(&tb);
    }

    #[test]
    fn test_negative_balances_switch_columns() {
        let registry = TestRegistryBuilder::new()
            .with_account("Overdraft", AccountType::Asset, dec!(-40))
            .with_account("Refunds", AccountType::Income, dec!(-40))
            .build();

        let tb = TrialBalance::generate(&registry);

        assert_money_eq(&tb.rows[0].credit, dec!(40));
        assert_money_eq(&tb.rows[1].debit, dec!(40));
        assert_trial_balance_balanced(&tb);
    }

    #[test]
    fn test_imbalance_is_reported_not_corrected() {
        let registry = TestRegistryBuilder::new()
            .with_account("Cash", AccountType::Asset, dec!(100))
            .with_account("Capital", AccountType::Equity, dec!(60))
            .build();

        let tb = TrialBalance::generate(&registry);

        assert!(!tb.is_balanced());
        assert_money_eq(&tb.difference(), dec!(40));
        assert_money_eq(&tb.total_debit, dec!(100));
        assert!(tb.imbalance_warning().is_some());
    }

    proptest! {
        #[test]
        fn prop_difference_matches_signed_sums(accounts in accounts_strategy(20)) {
            let expected: Decimal = accounts
                .iter()
                .map(|a| if a.account_type.is_debit_normal() { a.balance } else { -a.balance })
                .sum();
            let registry = AccountRegistry::new(Currency::BDT, accounts).unwrap();

            let tb = TrialBalance::generate(&registry);

            prop_assert_eq!(tb.difference().amount(), expected);
        }
    }
}

// ============================================================================
// Owner's Equity Tests
// ============================================================================

mod owners_equity_tests {
    use super::*;

    #[test]
    fn test_beginning_capital_is_rolled_back() {
        let equity = OwnersEquity::generate(&AccountFixtures::registry(AccountFixtures::small_business()));

        assert_money_eq(&equity.ending_capital, dec!(1000));
        assert_money_eq(&equity.net_income, dec!(200));
        assert_money_eq(&equity.drawings, dec!(50));
        assert_money_eq(&equity.beginning_capital, dec!(850));
    }

    #[test]
    fn test_sample_chart() {
        let equity = OwnersEquity::generate(&AccountFixtures::sample_registry());
        assert_money_eq(&equity.net_income, dec!(115000));
        assert_money_eq(&equity.beginning_capital, dec!(223000));
    }

    #[test]
    fn test_missing_capital_accounts_count_as_zero() {
        let equity = OwnersEquity::generate(&AccountFixtures::registry(
            AccountFixtures::income_and_expense_only(),
        ));
        assert_money_zero(&equity.ending_capital);
        assert_money_eq(&equity.beginning_capital, dec!(-200));
    }
}

// ============================================================================
// Cash Flow Tests
// ============================================================================

mod cash_flow_tests {
    use super::*;

    #[test]
    fn test_operating_only() {
        let cf = CashFlowStatement::generate(&AccountFixtures::registry(
            AccountFixtures::income_and_expense_only(),
        ));

        assert_money_eq(&cf.operating, dec!(200));
        assert_money_zero(&cf.investing);
        assert_money_zero(&cf.financing);
        assert_money_eq(&cf.ending_cash, cf.beginning_cash.amount() + dec!(200));
    }

    #[test]
    fn test_sample_chart_buckets() {
        let cf = CashFlowStatement::generate(&AccountFixtures::sample_registry());

        assert_money_eq(&cf.operating, dec!(115000));
        assert_money_eq(&cf.investing, dec!(-180000));
        assert_money_eq(&cf.financing, dec!(488000));
        assert_money_eq(&cf.net_change, dec!(423000));
        assert_money_eq(&cf.beginning_cash, dec!(300000));
        assert_money_eq(&cf.ending_cash, dec!(723000));
    }
}

// ============================================================================
// Income Statement and Balance Sheet Tests
// ============================================================================

mod statement_tests {
    use super::*;

    #[test]
    fn test_positive_contra_expense_adds_to_expenses() {
        let registry = TestRegistryBuilder::new()
            .with_account("Sales", AccountType::Income, dec!(1000))
            .with_account("Rent", AccountType::Expense, dec!(300))
            .with_account("Bank Charges Adjustment", AccountType::ContraExpense, dec!(20))
            .build();

        let statement = IncomeStatement::generate(&registry);

        assert_money_eq(&statement.contra_expenses, dec!(20));
        assert_money_eq(&statement.net_expenses, dec!(320));
        assert_money_eq(&statement.net_income, dec!(680));
    }

    #[test]
    fn test_contra_accounts_adjust_income() {
        let registry = TestRegistryBuilder::new()
            .with_account("Sales", AccountType::Income, dec!(1000))
            .with_account("Sales Returns", AccountType::ContraIncome, dec!(100))
            .with_account("Purchases", AccountType::Expense, dec!(600))
            .with_account("Purchase Returns", AccountType::ContraExpense, dec!(-50))
            .build();

        let statement = IncomeStatement::generate(&registry);

        assert_money_eq(&statement.net_revenue, dec!(900));
        assert_money_eq(&statement.net_expenses, dec!(550));
        assert_money_eq(&statement.net_income, dec!(350));
    }

    #[test]
    fn test_sample_balance_sheet() {
        let sheet = BalanceSheet::generate(&AccountFixtures::sample_registry());

        assert_balance_sheet_balanced(&sheet);
        assert_money_eq(&sheet.total_assets, dec!(680000));
    }
}

// ============================================================================
// Reconciliation Tests
// ============================================================================

mod reconciliation_tests {
    use super::*;

    #[test]
    fn test_balanced_reconciliation() {
        let report = ReconciliationReport::from_result(&ReconciliationFixtures::balanced(), Currency::BDT);

        assert_money_eq(&report.cleared_balance, dec!(12000));
        assert_eq!(report.difference, MoneyFixtures::bdt_zero());
        assert_eq!(report.style, DifferenceStyle::Balanced);
    }

    #[test]
    fn test_difference_is_ending_minus_cleared() {
        let report =
            ReconciliationReport::from_result(&ReconciliationFixtures::short_by_250(), Currency::BDT);

        assert_money_eq(&report.difference, dec!(250));
        assert_eq!(report.style, DifferenceStyle::OutOfBalance);
    }
}
