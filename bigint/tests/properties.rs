use bigint::BigInt;
use proptest::prelude::*;

fn big() -> impl Strategy<Value = BigInt> {
    "-?[0-9]{1,60}".prop_map(|s| BigInt::from_string(&s).unwrap())
}

fn normalized(s: &str) -> String {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{trimmed}")
    } else {
        trimmed.to_string()
    }
}

proptest! {
    #[test]
    fn doesnt_crash(s in "\\PC*") {
        let _ = BigInt::from_string(&s);
    }

    #[test]
    fn string_round_trip(s in "[+-]?[0-9]{1,60}") {
        let parsed = BigInt::from_string(&s).unwrap();
        prop_assert_eq!(parsed.to_string(), normalized(&s));
    }

    #[test]
    fn double_negation(x in big()) {
        prop_assert_eq!(x.negated().negated(), x.clone());
        prop_assert!(!x.abs().is_negative());
        prop_assert_eq!(x.abs().abs(), x.abs());
    }

    #[test]
    fn total_order(x in big(), y in big()) {
        let holds = [x.less_than(&y), x.equal(&y), x.greater_than(&y)];
        prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        prop_assert_eq!(x.greater_than_or_equal(&y), !x.less_than(&y));
        prop_assert_eq!(x.less_than_or_equal(&y), !x.greater_than(&y));
        prop_assert_eq!(x.compare(&y), -y.compare(&x));
    }

    #[test]
    fn sign_predicates_exclusive(x in big()) {
        let holds = [x.is_positive(), x.is_negative(), x.is_zero()];
        prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
    }

    #[test]
    fn division_remainder_bound(x in big(), y in big()) {
        prop_assume!(!y.is_zero());
        let q = x.checked_div(&y).unwrap();
        let gap = (&x - &(&q * &y)).abs();
        prop_assert!(gap.less_than(&y.abs()));
        prop_assert_eq!(gap, x.checked_rem(&y).unwrap().abs());
    }

    #[test]
    fn negative_exponent_is_one(x in big(), e in i64::MIN..0i64) {
        prop_assert_eq!(x.pow(&BigInt::from_i64(e)).unwrap(), BigInt::one());
    }

    #[test]
    fn i64_round_trip(n in any::<i64>()) {
        prop_assert_eq!(BigInt::from_i64(n).to_i64().unwrap(), n);
    }
}
