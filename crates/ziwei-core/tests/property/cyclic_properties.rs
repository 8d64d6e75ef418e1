use proptest::prelude::*;
use ziwei_core::cyclic;
use ziwei_core::types::{Branch, Position, Stem, SymbolName};

proptest! {
    #[test]
    fn wrap_stays_in_range(value in any::<i32>(), modulus in 1usize..64) {
        let wrapped = cyclic::wrap(i64::from(value), modulus);
        prop_assert!(wrapped < modulus);
        prop_assert_eq!((i64::from(value) - wrapped as i64).rem_euclid(modulus as i64), 0);
    }

    #[test]
    fn advance_then_back_is_identity(index in 0usize..12, steps in -1000i64..1000) {
        let there = cyclic::advance(index, steps, 12);
        prop_assert_eq!(cyclic::advance(there, -steps, 12), index);
    }

    #[test]
    fn offset_inverts_advance(from in 0usize..12, steps in 0i64..12) {
        let to = cyclic::advance(from, steps, 12);
        prop_assert_eq!(cyclic::offset(from, to, 12) as i64, steps);
    }

    #[test]
    fn position_geometry(index in -100i64..100) {
        let position = Position::at(index);
        prop_assert_eq!(position.ring_index(), cyclic::wrap(index, 12));
        prop_assert_eq!(position.opposite().opposite(), position);
        let [t1, t2] = position.trines();
        prop_assert!(t1 != position && t2 != position && t1 != t2);
        prop_assert_eq!(t1.trines(), [t2, position]);
    }

    #[test]
    fn year_cycles_repeat_every_sixty(year in -3000i64..3000) {
        prop_assert_eq!(Stem::from_year(year), Stem::from_year(year + 60));
        prop_assert_eq!(Branch::from_year(year), Branch::from_year(year + 60));
        prop_assert_eq!(Stem::from_year(year).advance(1), Stem::from_year(year + 1));
    }

    #[test]
    fn canonicalization_is_idempotent(raw in "\\PC{1,6}") {
        if let Some(symbol) = SymbolName::canonical(&raw) {
            let again = SymbolName::canonical(symbol.as_str());
            prop_assert_eq!(again.as_ref(), Some(&symbol));
        }
    }
}
