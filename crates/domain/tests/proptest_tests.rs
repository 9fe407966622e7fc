//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use domain::value_objects::{
    Address, DateRange, EmailAddress, Money, PersonName, PhoneNumber, TimeSlot, ValueObject,
};
use proptest::prelude::*;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
}

// ============================================================================
// EmailAddress Property Tests
// ============================================================================

mod email_address_tests {
    use super::*;

    proptest! {
        #[test]
        fn normalization_is_a_fixed_point(
            local in "[A-Za-z0-9][A-Za-z0-9_+-]{0,15}",
            domain in "[A-Za-z][A-Za-z0-9]{0,10}",
            tld in "[A-Za-z]{2,4}",
            padding in "[ ]{0,3}"
        ) {
            let raw = format!("{padding}{local}@{domain}.{tld}{padding}");
            let first = EmailAddress::new(&raw).unwrap();
            let second = EmailAddress::new(first.as_str()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn email_without_at_rejected(text in "[a-zA-Z0-9]{1,20}") {
            prop_assert!(EmailAddress::new(&text).is_err());
        }

        #[test]
        fn email_roundtrips_through_json(
            local in "[a-z]{1,10}",
            domain in "[a-z]{1,10}",
            tld in "[a-z]{2,4}"
        ) {
            let email = EmailAddress::new(format!("{local}@{domain}.{tld}")).unwrap();
            let json = serde_json::to_string(&email).unwrap();
            let parsed: EmailAddress = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(email, parsed);
        }
    }
}

// ============================================================================
// PhoneNumber Property Tests
// ============================================================================

mod phone_number_tests {
    use super::*;

    proptest! {
        #[test]
        fn decomposition_reassembles(first in "[1-9]", rest in "[0-9]{6,14}") {
            let phone = PhoneNumber::new(format!("+{first}{rest}")).unwrap();
            let joined = format!("{}{}", phone.country_code(), phone.national_number());
            prop_assert_eq!(joined.as_str(), phone.as_str());
            prop_assert!(phone.as_str().len() >= 8 && phone.as_str().len() <= 16);
        }

        #[test]
        fn phone_roundtrips_through_json(first in "[1-9]", rest in "[0-9]{6,12}") {
            let phone = PhoneNumber::new(format!("+{first}{rest}")).unwrap();
            let json = serde_json::to_string(&phone).unwrap();
            let parsed: PhoneNumber = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(phone, parsed);
        }
    }
}

// ============================================================================
// Money Property Tests
// ============================================================================

mod money_tests {
    use super::*;

    proptest! {
        #[test]
        fn amounts_have_at_most_two_decimals(amount in -1.0e6f64..1.0e6f64) {
            let money = Money::new(amount, "USD").unwrap();
            let scaled = money.amount() * 100.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        }

        #[test]
        fn addition_is_commutative(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let x = Money::from_cents(a, "GBP").unwrap();
            let y = Money::from_cents(b, "GBP").unwrap();
            prop_assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
        }

        #[test]
        fn negate_is_an_involution(cents in -1_000_000_000i64..1_000_000_000) {
            let money = Money::from_cents(cents, "USD").unwrap();
            prop_assert_eq!(money.negate().negate(), money.clone());
            prop_assert_eq!(money.abs(), money.negate().abs());
            prop_assert!(!money.abs().is_negative());
        }

        #[test]
        fn currency_mismatch_rejected(a in -1.0e6f64..1.0e6f64) {
            let usd = Money::new(a, "USD").unwrap();
            let eur = Money::new(a, "EUR").unwrap();
            prop_assert!(usd.add(&eur).is_err());
            prop_assert!(!usd.equals(&eur));
        }
    }
}

// ============================================================================
// Address and PersonName Property Tests
// ============================================================================

mod address_tests {
    use super::*;

    proptest! {
        #[test]
        fn equal_inputs_are_equal_values(
            street in "[A-Za-z0-9 ]{3,40}",
            city in "[A-Za-z]{2,20}",
            postal in "[A-Z0-9]{3,10}"
        ) {
            prop_assume!(!street.trim().is_empty() && street.trim().len() >= 3);
            let a = Address::from_parts(street.clone(), city.clone(), "CA", postal.clone(), "USA");
            let b = Address::from_parts(street, city, "CA", postal, "USA");
            let (a, b) = (a.unwrap(), b.unwrap());
            prop_assert!(a.equals(&b));
            prop_assert!(a.is_us_address());
        }
    }
}

mod person_name_tests {
    use super::*;

    proptest! {
        #[test]
        fn case_does_not_affect_equality(first in "[a-z]{1,20}", last in "[a-z]{1,20}") {
            let lower = PersonName::new(&first, &last, None).unwrap();
            let upper = PersonName::new(&first.to_uppercase(), &last.to_uppercase(), None).unwrap();
            prop_assert_eq!(lower, upper);
        }
    }
}

// ============================================================================
// DateRange and TimeSlot Property Tests
// ============================================================================

mod interval_tests {
    use super::*;

    fn date_range() -> impl Strategy<Value = DateRange> {
        (0i64..100_000, 0i64..100_000).prop_map(|(offset, len)| {
            let start = epoch() + TimeDelta::minutes(offset);
            DateRange::new(start, start + TimeDelta::minutes(len)).unwrap()
        })
    }

    fn time_slot() -> impl Strategy<Value = TimeSlot> {
        (0i64..10_000, 1i64..=1440).prop_map(|(offset, len)| {
            TimeSlot::with_duration(epoch() + TimeDelta::minutes(offset), len).unwrap()
        })
    }

    proptest! {
        #[test]
        fn date_range_overlap_is_symmetric(a in date_range(), b in date_range()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn date_range_ordering_excludes_overlap(a in date_range(), b in date_range()) {
            let ordered = a.is_before(&b) || a.is_after(&b);
            prop_assert_eq!(ordered, !a.overlaps(&b));
        }

        #[test]
        fn date_range_intersection_is_included(a in date_range(), b in date_range()) {
            if let Some(shared) = a.intersection(&b) {
                prop_assert!(a.includes(&shared));
                prop_assert!(b.includes(&shared));
            }
        }

        #[test]
        fn zero_length_range_is_valid(offset in 0i64..1_000_000) {
            let instant = epoch() + TimeDelta::seconds(offset);
            prop_assert!(DateRange::new(instant, instant).is_ok());
            prop_assert!(TimeSlot::new(instant, instant).is_err());
        }

        #[test]
        fn for_day_contains_every_minute(day in 0i64..3650, minute in 0i64..1440) {
            let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + TimeDelta::days(day);
            let range = DateRange::for_day(date).unwrap();
            let instant = epoch() + TimeDelta::days(day) + TimeDelta::minutes(minute);
            prop_assert!(range.contains(instant));
        }

        #[test]
        fn time_slot_overlap_is_symmetric(a in time_slot(), b in time_slot()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            prop_assert_eq!(a.is_before(&b) || a.is_after(&b), !a.overlaps(&b));
        }

        #[test]
        fn time_slot_roundtrips_through_json(s in time_slot()) {
            let json = serde_json::to_string(&s).unwrap();
            let parsed: TimeSlot = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(s, parsed);
        }
    }
}
