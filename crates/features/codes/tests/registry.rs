use glint_codes::CodeService;
use glint_kernel::domain::codes::CodeFlag;
use glint_kernel::domain::config::Configuration;
use glint_kernel::store::{ConfigHandle, MemoryStore};
use proptest::prelude::*;
use std::sync::Arc;

fn registry(enabled: CodeFlag) -> (CodeService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let cfg = Configuration { enabled_codes: enabled, ..Configuration::default() };
    (CodeService::new(ConfigHandle::new(cfg, Arc::clone(&store))), store)
}

fn any_code() -> impl Strategy<Value = CodeFlag> {
    let codes: Vec<CodeFlag> = CodeFlag::codes().collect();
    proptest::sample::select(codes)
}

fn any_set() -> impl Strategy<Value = CodeFlag> {
    any::<u64>().prop_map(CodeFlag::from_bits_truncate)
}

#[test]
fn giant_replaces_dwarf() {
    let (codes, _) = registry(CodeFlag::DWARF);
    codes.toggle(CodeFlag::GIANT, true);
    assert_eq!(codes.all_enabled(), CodeFlag::GIANT);
}

#[test]
fn unrelated_codes_accumulate() {
    let (codes, _) = registry(CodeFlag::empty());
    codes.toggle(CodeFlag::SHIRTS, true);
    assert_eq!(codes.all_enabled(), CodeFlag::SHIRTS);

    codes.toggle(CodeFlag::INDIVIDUAL, true);
    assert_eq!(codes.all_enabled(), CodeFlag::SHIRTS | CodeFlag::INDIVIDUAL);
}

#[test]
fn shirts_disables_nothing() {
    let start = CodeFlag::all() - CodeFlag::SHIRTS;
    let (codes, _) = registry(start);
    codes.toggle(CodeFlag::SHIRTS, true);
    assert_eq!(codes.all_enabled(), CodeFlag::all());
}

#[test]
fn full_override_clears_race_and_size_codes() {
    let (codes, _) = registry(CodeFlag::OOPS_HYUR | CodeFlag::DWARF | CodeFlag::SHIRTS);
    codes.toggle(CodeFlag::SMILES, true);
    assert_eq!(codes.all_enabled(), CodeFlag::SMILES | CodeFlag::SHIRTS);
    assert!(codes.any_enabled(CodeFlag::FULL_CODES));
    assert!(!codes.any_enabled(CodeFlag::RACE_CODES | CodeFlag::SIZE_CODES));
}

#[test]
fn every_toggle_is_persisted() {
    let (codes, store) = registry(CodeFlag::empty());
    codes.toggle(CodeFlag::CROWN, true);
    codes.toggle(CodeFlag::CROWN, true);
    codes.toggle(CodeFlag::CROWN, false);

    assert_eq!(store.saves(), 3);
    assert_eq!(store.last().map(|c| c.enabled_codes), Some(CodeFlag::empty()));
}

proptest! {
    #[test]
    fn enable_then_disable_round_trips(start in any_set(), code in any_code()) {
        let (codes, _) = registry(start);
        codes.toggle(code, true);
        prop_assert!(codes.enabled(code));
        codes.toggle(code, false);
        prop_assert!(!codes.enabled(code));
    }

    #[test]
    fn enabling_clears_exactly_the_conflicts(start in any_set(), code in any_code()) {
        let (codes, _) = registry(start);
        codes.toggle(code, true);
        let after = codes.all_enabled();
        prop_assert!(!after.intersects(code.conflicts()));
        prop_assert_eq!(after, (start - code.conflicts()) | code);
    }

    #[test]
    fn masked_is_a_bitwise_and(start in any_set(), mask in any::<u64>()) {
        let mask = CodeFlag::from_bits_retain(mask);
        let (codes, _) = registry(start);
        prop_assert_eq!(codes.masked(mask), start & mask);
        prop_assert_eq!(codes.any_enabled(mask), !(start & mask).is_empty());
    }

    #[test]
    fn repeating_a_toggle_changes_nothing(start in any_set(), code in any_code(), enable in any::<bool>()) {
        let (codes, store) = registry(start);
        codes.toggle(code, enable);
        let first = codes.all_enabled();
        codes.toggle(code, enable);
        prop_assert_eq!(codes.all_enabled(), first);
        prop_assert_eq!(store.saves(), 2);
    }
}
