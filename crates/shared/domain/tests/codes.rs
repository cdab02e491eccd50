use glint_domain::codes::CodeFlag;
use glint_domain::race::Race;

#[test]
fn no_code_conflicts_with_itself() {
    for code in CodeFlag::codes() {
        assert!(!code.conflicts().contains(code), "{} lists itself", code.name());
    }
}

#[test]
fn there_are_twenty_two_codes() {
    assert_eq!(CodeFlag::codes().count(), 22);
    assert!(CodeFlag::codes().all(|code| code.bits().count_ones() == 1));
}

#[test]
fn size_codes_exclude_each_other() {
    assert!(CodeFlag::DWARF.conflicts().contains(CodeFlag::GIANT));
    assert!(CodeFlag::GIANT.conflicts().contains(CodeFlag::DWARF));
}

#[test]
fn shirts_conflicts_with_nothing() {
    assert!(CodeFlag::SHIRTS.conflicts().is_empty());
}

#[test]
fn race_code_clears_other_races_and_full_overrides() {
    let conflicts = CodeFlag::OOPS_VIERA.conflicts();
    assert_eq!(
        conflicts,
        (CodeFlag::RACE_CODES | CodeFlag::FULL_CODES) - CodeFlag::OOPS_VIERA
    );
}

#[test]
fn world_clears_both_dye_and_gear_codes() {
    let conflicts = CodeFlag::WORLD.conflicts();
    assert!(conflicts.contains(CodeFlag::CLOWN | CodeFlag::EMPEROR));
    assert!(conflicts.contains(CodeFlag::ELEPHANTS | CodeFlag::DOLPHINS));
    assert!(!conflicts.intersects(CodeFlag::SIZE_CODES | CodeFlag::SHIRTS));
}

#[test]
fn full_override_codes_clear_almost_everything() {
    let conflicts = CodeFlag::FACE.conflicts();
    assert!(conflicts.contains(CodeFlag::MANDERVILLE | CodeFlag::SMILES | CodeFlag::CROWN));
    assert!(conflicts.contains(CodeFlag::RACE_CODES | CodeFlag::SIZE_CODES));
    assert!(!conflicts.intersects(CodeFlag::INDIVIDUAL | CodeFlag::SHIRTS));
}

#[test]
fn asymmetric_rows_are_kept() {
    // Individual clears the full overrides, but they leave Individual alone.
    assert!(CodeFlag::INDIVIDUAL.conflicts().contains(CodeFlag::FACE));
    assert!(!CodeFlag::FACE.conflicts().contains(CodeFlag::INDIVIDUAL));
}

#[test]
fn every_code_has_a_name_and_description() {
    for code in CodeFlag::codes() {
        assert_ne!(code.name(), "Unknown");
        assert!(!code.description().is_empty());
    }
}

#[test]
fn lookup_accepts_constant_and_display_names() {
    assert_eq!(CodeFlag::lookup("dwarf"), Some(CodeFlag::DWARF));
    assert_eq!(CodeFlag::lookup("oops-au-ra"), Some(CodeFlag::OOPS_AU_RA));
    assert_eq!(CodeFlag::lookup("Everyone Namazu"), Some(CodeFlag::DOLPHINS));
    assert_eq!(CodeFlag::lookup("artisan"), None);
}

#[test]
fn race_resolves_only_a_single_race_code() {
    assert_eq!(Race::from_codes(CodeFlag::OOPS_LALAFELL | CodeFlag::SHIRTS), Race::Lalafell);
    assert_eq!(Race::from_codes(CodeFlag::SHIRTS), Race::Unknown);
    assert_eq!(Race::from_codes(CodeFlag::OOPS_HYUR | CodeFlag::OOPS_VIERA), Race::Unknown);
}
