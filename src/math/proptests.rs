//! Property tests checking the arithmetic against `num-bigint` and
//! `num-rational`.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::math::{gcd, BigInt, Fraction};

    type Reference = num_bigint::BigInt;
    type ReferenceRatio = num_rational::BigRational;

    // decimal literals well past one 64-bit word
    fn literal() -> impl Strategy<Value = String> {
        "-?[0-9]{1,60}"
    }

    fn non_zero_literal() -> impl Strategy<Value = String> {
        "-?[1-9][0-9]{0,40}"
    }

    fn both(s: &str) -> (BigInt, Reference) {
        (s.parse().unwrap(), s.parse().unwrap())
    }

    fn fraction(numer: &str, denom: &str) -> (Fraction, ReferenceRatio) {
        let (n, rn) = both(numer);
        let (d, rd) = both(denom);
        (Fraction::new(n, d).unwrap(), ReferenceRatio::new(rn, rd))
    }

    fn same(ours: &Fraction, reference: &ReferenceRatio) -> bool {
        ours.numerator().to_string() == reference.numer().to_string()
            && ours.denominator().to_string() == reference.denom().to_string()
    }

    proptest! {
        #[test]
        fn bigint_parse_fmt_matches(a in literal()) {
            let (ours, reference) = both(&a);
            prop_assert_eq!(ours.to_string(), reference.to_string());
        }

        #[test]
        fn bigint_add_sub_match(a in literal(), b in literal()) {
            let (x, rx) = both(&a);
            let (y, ry) = both(&b);
            prop_assert_eq!((&x + &y).to_string(), (&rx + &ry).to_string());
            prop_assert_eq!((&x - &y).to_string(), (&rx - &ry).to_string());
        }

        #[test]
        fn bigint_mul_matches(a in literal(), b in literal()) {
            let (x, rx) = both(&a);
            let (y, ry) = both(&b);
            prop_assert_eq!((x * y).to_string(), (rx * ry).to_string());
        }

        #[test]
        fn bigint_div_rem_matches(a in literal(), b in non_zero_literal()) {
            let (x, rx) = both(&a);
            let (y, ry) = both(&b);
            let (q, r) = x.div_rem(&y).unwrap();
            prop_assert_eq!(q.to_string(), (&rx / &ry).to_string());
            prop_assert_eq!(r.to_string(), (&rx % &ry).to_string());
            prop_assert_eq!(&q * &y + &r, x);
        }

        #[test]
        fn bigint_ordering_matches(a in literal(), b in literal()) {
            let (x, rx) = both(&a);
            let (y, ry) = both(&b);
            prop_assert_eq!(x.cmp(&y), rx.cmp(&ry));
        }

        #[test]
        fn fraction_ops_match(
            an in literal(), ad in non_zero_literal(),
            bn in literal(), bd in non_zero_literal(),
        ) {
            let (a, ra) = fraction(&an, &ad);
            let (b, rb) = fraction(&bn, &bd);
            prop_assert!(same(&(&a + &b), &(&ra + &rb)));
            prop_assert!(same(&(&a - &b), &(&ra - &rb)));
            prop_assert!(same(&(&a * &b), &(&ra * &rb)));
            if rb.is_zero() {
                prop_assert!(a.checked_div(&b).is_err());
            } else {
                prop_assert!(same(&a.checked_div(&b).unwrap(), &(&ra / &rb)));
            }
        }

        #[test]
        fn results_stay_reduced(
            an in literal(), ad in non_zero_literal(),
            bn in literal(), bd in non_zero_literal(),
        ) {
            let (a, _) = fraction(&an, &ad);
            let (b, _) = fraction(&bn, &bd);
            for r in [&a + &b, &a - &b, &a * &b] {
                prop_assert!(r.denominator().is_positive());
                prop_assert!(gcd(r.numerator(), r.denominator()).is_one());
            }
        }

        #[test]
        fn reduction_is_idempotent(n in literal(), d in non_zero_literal()) {
            let (f, _) = fraction(&n, &d);
            let again = Fraction::new(f.numerator().clone(), f.denominator().clone()).unwrap();
            prop_assert_eq!(again, f);
        }
    }
}
