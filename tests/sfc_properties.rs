use mesh_sfc::prelude::*;
use proptest::prelude::*;

mod util;
use util::{assert_bijection, assert_descendants_bracketed, assert_successor_chain};

#[test]
fn bijection_on_small_levels() {
    for level in 0..=8 {
        assert_bijection::<Line>(level);
    }
    for level in 0..=4 {
        assert_bijection::<Triangle>(level);
        assert_bijection::<Quad>(level);
    }
    for level in 0..=3 {
        assert_bijection::<Prism>(level);
        assert_bijection::<Hex>(level);
    }
}

#[test]
fn successor_chain_covers_each_level_once() {
    for level in 1..=8 {
        assert_successor_chain::<Line>(level);
    }
    for level in 1..=4 {
        assert_successor_chain::<Triangle>(level);
        assert_successor_chain::<Quad>(level);
    }
    for level in 1..=3 {
        assert_successor_chain::<Prism>(level);
        assert_successor_chain::<Hex>(level);
    }
}

#[test]
fn descendants_are_bracketed() {
    for id in 0..8 {
        let prism = Prism::from_linear_id(1, id);
        assert_descendants_bracketed(prism, 1);
        assert_descendants_bracketed(prism, 3);
    }
    for id in 0..16 {
        let tri = Triangle::from_linear_id(2, id);
        assert_descendants_bracketed(tri, 4);
    }
    assert_descendants_bracketed(Line::from_linear_id(2, 1), 6);
}

#[test]
fn level_iter_matches_linear_ids() {
    for (i, prism) in LevelIter::<Prism>::new(3).enumerate() {
        assert_eq!(prism.linear_id(3), i as u64);
    }
}

fn deep_prism() -> impl Strategy<Value = Prism> {
    (1u8..=Prism::MAX_LEVEL).prop_flat_map(|level| {
        (0..Prism::count_at_level(level)).prop_map(move |id| Prism::from_linear_id(level, id))
    })
}

fn deep_triangle() -> impl Strategy<Value = Triangle> {
    (1u8..=Triangle::MAX_LEVEL).prop_flat_map(|level| {
        (0..Triangle::count_at_level(level))
            .prop_map(move |id| Triangle::from_linear_id(level, id))
    })
}

proptest! {
    #[test]
    fn prism_ids_round_trip(level in 0u8..=Prism::MAX_LEVEL, raw in any::<u64>()) {
        let id = raw % Prism::count_at_level(level);
        let prism = Prism::from_linear_id(level, id);
        prop_assert_eq!(prism.linear_id(level), id);
        prop_assert!(prism.validate_invariants().is_ok());
        // Each factor decodes from its own id independently.
        prop_assert_eq!(
            *prism.triangle(),
            Triangle::from_linear_id(level, prism.triangle().linear_id(level))
        );
        prop_assert_eq!(
            *prism.line(),
            Line::from_linear_id(level, prism.line().linear_id(level))
        );
    }

    #[test]
    fn prism_successor_adds_one(prism in deep_prism()) {
        let level = prism.level();
        let id = prism.linear_id(level);
        prop_assume!(id + 1 < Prism::count_at_level(level));
        let succ = prism.successor(level);
        prop_assert_eq!(succ.linear_id(level), id + 1);
        prop_assert!(succ.validate_invariants().is_ok());
    }

    #[test]
    fn triangle_successor_adds_one(tri in deep_triangle()) {
        let level = tri.level();
        let id = tri.linear_id(level);
        prop_assume!(id + 1 < Triangle::count_at_level(level));
        prop_assert_eq!(tri.successor(level).linear_id(level), id + 1);
    }

    #[test]
    fn parent_child_inverse(tri in deep_triangle(), prism in deep_prism()) {
        prop_assert_eq!(tri.parent().child(tri.child_id()), tri);
        prop_assert_eq!(prism.parent().child(prism.child_id()), prism);
        prop_assert_eq!(prism.sibling(prism.child_id()), prism);
        prop_assert!(prism.parent().is_parent(&prism));
    }

    #[test]
    fn ancestor_ids_are_prefixes(prism in deep_prism()) {
        let level = prism.level();
        let id = prism.linear_id(level);
        for coarse in 0..level {
            let shift = 3 * u32::from(level - coarse);
            prop_assert_eq!(prism.linear_id(coarse), id >> shift);
            prop_assert!(prism.ancestor(coarse).is_ancestor(&prism));
        }
    }

    #[test]
    fn descendants_keep_the_ancestor(tri in deep_triangle(), extra in 0u8..4) {
        let level = (tri.level() + extra).min(Triangle::MAX_LEVEL);
        let first = tri.first_descendant(level);
        let last = tri.last_descendant(level);
        prop_assert_eq!(first.ancestor(tri.level()), tri);
        prop_assert_eq!(last.ancestor(tri.level()), tri);
        let span = Triangle::count_at_level(level - tri.level());
        prop_assert_eq!(last.linear_id(level) - first.linear_id(level) + 1, span);
    }

    #[test]
    fn sfc_order_agrees_with_ids(a in deep_prism(), b in deep_prism()) {
        let level = a.level().max(b.level());
        if a.linear_id(level) != b.linear_id(level) {
            prop_assert_eq!(a.sfc_cmp(&b), a.linear_id(level).cmp(&b.linear_id(level)));
        }
        let nca = a.nearest_common_ancestor(&b);
        prop_assert!(nca == a || nca.is_ancestor(&a));
        prop_assert!(nca == b || nca.is_ancestor(&b));
    }
}
