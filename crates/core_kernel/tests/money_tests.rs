//! Unit tests for money, rates and report number formatting

use core_kernel::{Currency, Money, MoneyError, NumberGrouping, Rate, format_grouped, parse_amount};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::BDT);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_negative_amount_abs() {
        let m = Money::new(dec!(-75.25), Currency::USD);
        assert!(m.is_negative());
        assert_eq!(m.abs().amount(), dec!(75.25));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_and_sub() {
        let a = Money::new(dec!(100.00), Currency::BDT);
        let b = Money::new(dec!(40.50), Currency::BDT);

        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(140.50));
        assert_eq!(a.checked_sub(&b).unwrap().amount(), dec!(59.50));
    }

    #[test]
    fn test_checked_sub_currency_mismatch() {
        let a = Money::new(dec!(1), Currency::GBP);
        let b = Money::new(dec!(1), Currency::INR);

        assert_eq!(
            a.checked_sub(&b),
            Err(MoneyError::CurrencyMismatch("GBP".to_string(), "INR".to_string()))
        );
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_parse_currency_code() {
        assert_eq!("bdt".parse::<Currency>().unwrap(), Currency::BDT);
        assert_eq!(" USD ".parse::<Currency>().unwrap(), Currency::USD);
        assert!(matches!("XYZ".parse::<Currency>(), Err(MoneyError::UnknownCurrency(_))));
    }

    #[test]
    fn test_display_uses_symbol_and_two_places() {
        let m = Money::new(dec!(12.5), Currency::BDT);
        assert_eq!(m.to_string(), "৳ 12.50");
    }

    #[test]
    fn test_formatted_with_grouping() {
        let m = Money::new(dec!(1500000), Currency::INR);
        assert_eq!(m.formatted(NumberGrouping::Indian), "₹ 15,00,000.00");
        assert_eq!(m.formatted(NumberGrouping::Standard), "₹ 1,500,000.00");
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_small_values_are_not_grouped() {
        assert_eq!(format_grouped(dec!(5), NumberGrouping::Standard), "5.00");
        assert_eq!(format_grouped(dec!(123.4), NumberGrouping::Indian), "123.40");
    }

    #[test]
    fn test_exact_group_boundaries() {
        assert_eq!(format_grouped(dec!(100000), NumberGrouping::Standard), "100,000.00");
        assert_eq!(format_grouped(dec!(100000), NumberGrouping::Indian), "1,00,000.00");
    }

    #[test]
    fn test_grouping_from_locale_names() {
        assert_eq!("en-IN".parse::<NumberGrouping>().unwrap(), NumberGrouping::Indian);
        assert_eq!("standard".parse::<NumberGrouping>().unwrap(), NumberGrouping::Standard);
        assert!("fr".parse::<NumberGrouping>().is_err());
    }

    #[test]
    fn test_parse_amount_with_sign() {
        assert_eq!(parse_amount("-1,000.10"), dec!(-1000.10));
        assert_eq!(parse_amount("12abc"), Decimal::ZERO);
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_rate_round_trip_percentage() {
        let rate = Rate::from_percentage(dec!(7.5));
        assert_eq!(rate.as_decimal(), dec!(0.075));
        assert_eq!(rate.as_percentage(), dec!(7.5));
    }

    #[test]
    fn test_default_rate_is_zero() {
        assert_eq!(Rate::default().of(dec!(999)), Decimal::ZERO);
    }
}
