// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use proptest::prelude::*;
use pyxis_rect::{Bounds, Rect};

fn rect() -> impl Strategy<Value = Rect> {
    (-1000..1000_i32, -1000..1000_i32, 0..500_i32, 0..500_i32)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn set_ops_commute(a in rect(), b in rect()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_contains_both_corners(a in rect(), b in rect()) {
        let u = a.union(&b);
        for r in [a, b] {
            prop_assert!(u.min_x() <= r.min_x() && u.min_y() <= r.min_y());
            prop_assert!(u.max_x() >= r.max_x() && u.max_y() >= r.max_y());
        }
    }

    #[test]
    fn intersection_is_empty_iff_disjoint(a in rect(), b in rect()) {
        let i = a.intersection(&b);
        prop_assert_eq!(i.is_empty(), !a.intersects(&b));
    }

    #[test]
    fn intersection_points_lie_in_both(a in rect(), b in rect(), px in -1000..1500_i32, py in -1000..1500_i32) {
        let i = a.intersection(&b);
        prop_assert_eq!(i.contains(px, py), a.contains(px, py) && b.contains(px, py));
    }
}
