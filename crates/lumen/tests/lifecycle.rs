//! Property tests for the resolver's subscription lifecycle.
//!
//! Random sequences of user changes and system flips must always leave the
//! resolver consistent with the pure resolution function, with exactly one
//! listener attached iff the preference is `system`.

use lumen::{
    resolve, ManualSignal, MemoryStore, Preference, PresentationBinding, ResolvedMode,
    ResolverConfig, RootStyle, SharedSurface, SystemSignal, ThemeResolver,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set(Preference),
    System(bool),
    Cycle,
    Resolve,
}

fn preference() -> impl Strategy<Value = Preference> {
    prop_oneof![
        Just(Preference::Light),
        Just(Preference::Dark),
        Just(Preference::System),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        preference().prop_map(Op::Set),
        any::<bool>().prop_map(Op::System),
        Just(Op::Cycle),
        Just(Op::Resolve),
    ]
}

proptest! {
    #[test]
    fn resolver_stays_consistent(start_dark in any::<bool>(), ops in prop::collection::vec(op(), 0..40)) {
        let store = MemoryStore::new();
        let signal = ManualSignal::new(ResolvedMode::from_is_dark(start_dark));
        let root = SharedSurface::new(RootStyle::new());
        let mut resolver = ThemeResolver::initialize(
            store.clone(),
            signal.clone(),
            root.clone(),
            ResolverConfig::default(),
        );

        for op in ops {
            match op {
                Op::Set(p) => resolver.set_preference(p),
                Op::System(dark) => signal.set_dark(dark),
                Op::Cycle => {
                    resolver.cycle();
                }
                Op::Resolve => resolver.resolve(),
            }

            let pref = resolver.preference();
            let expected = resolve(pref, signal.current());
            prop_assert_eq!(resolver.resolved(), expected);
            prop_assert_eq!(root.borrow().mode(), Some(expected));
            prop_assert_eq!(
                resolver.binding(),
                PresentationBinding::for_mode(expected, &Default::default())
            );
            prop_assert!(signal.listener_count() <= 1);
            prop_assert_eq!(signal.listener_count() == 1, pref == Preference::System);
        }

        drop(resolver);
        prop_assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn explicit_preference_ignores_system_flips(
        dark_pref in any::<bool>(),
        flips in prop::collection::vec(any::<bool>(), 1..20),
    ) {
        let pref = if dark_pref { Preference::Dark } else { Preference::Light };
        let signal = ManualSignal::new(ResolvedMode::Light);
        let mut resolver = ThemeResolver::with_defaults(MemoryStore::new(), signal.clone(), RootStyle::new());
        resolver.set_preference(pref);

        for dark in flips {
            signal.set_dark(dark);
            prop_assert_eq!(resolver.resolved(), ResolvedMode::from_is_dark(dark_pref));
        }
    }
}
