//! Property tests for validators and the comparator.

use std::cmp::Ordering;
use std::io::Cursor;

use proptest::prelude::*;

use city_trunfo::{compare, judge, Attribute, CardCode, CityCard, CityName, Prompter, Region, Verdict};

fn attribute() -> impl Strategy<Value = Attribute> {
    prop::sample::select(Attribute::ALL.to_vec())
}

prop_compose! {
    fn city_card()(
        population in 1i64..=2_000_000_000,
        area_km2 in 0.01f64..=30_000_000.0,
        gdp_billions in 0.001f64..=1_000_000.0,
    ) -> CityCard {
        CityCard::new(
            "A".parse().unwrap(),
            "A01".parse().unwrap(),
            CityName::new("Prop City", 2, 63).unwrap(),
            population,
            area_km2,
            gdp_billions,
        )
    }
}

proptest! {
    /// Swapping the cards flips the ordering.
    #[test]
    fn compare_is_antisymmetric(a in city_card(), b in city_card(), attr in attribute()) {
        prop_assert_eq!(compare(&a, &b, attr), compare(&b, &a, attr).reverse());
    }

    /// A card never beats itself.
    #[test]
    fn compare_is_reflexive(a in city_card(), attr in attribute()) {
        prop_assert_eq!(compare(&a, &a, attr), Ordering::Equal);
        prop_assert_eq!(judge(&a, &a.clone(), attr), Verdict::Tie);
    }

    /// Density ranks in the opposite direction of the raw metric.
    #[test]
    fn lower_density_wins(a in city_card(), b in city_card()) {
        let expected = b.density().partial_cmp(&a.density()).unwrap();
        prop_assert_eq!(compare(&a, &b, Attribute::Density), expected);
    }

    /// In-range integers are accepted on the first read, others are rejected.
    #[test]
    fn read_int_respects_bounds(value in -100i64..200, min in 0i64..50, span in 0i64..100) {
        let max = min + span;
        let input = format!("{value}\n{min}\n");
        let mut prompter = Prompter::new(Cursor::new(input.into_bytes()), Vec::new());

        let read = prompter.read_int("", min, max).unwrap();
        let (_, output) = prompter.into_inner();
        let rejected = !output.is_empty();

        if (min..=max).contains(&value) {
            prop_assert_eq!(read, value);
            prop_assert!(!rejected);
        } else {
            prop_assert_eq!(read, min);
            prop_assert!(rejected);
        }
    }

    /// Codes are accepted exactly when they match letter A-H plus two digits.
    #[test]
    fn code_pattern(code in "[A-Za-z0-9]{0,4}") {
        let upper = code.to_ascii_uppercase();
        let bytes = upper.as_bytes();
        let valid = bytes.len() == 3
            && (b'A'..=b'H').contains(&bytes[0])
            && bytes[1].is_ascii_digit()
            && bytes[2].is_ascii_digit();

        prop_assert_eq!(code.parse::<CardCode>().is_ok(), valid);
    }

    /// Regions are accepted exactly for single letters A-H in any case.
    #[test]
    fn region_pattern(region in "[A-Za-z0-9]{0,2}") {
        let valid = region.len() == 1
            && ('A'..='H').contains(&region.chars().next().unwrap().to_ascii_uppercase());

        prop_assert_eq!(region.parse::<Region>().is_ok(), valid);
    }
}
