use glint_kernel::config::{load_config, load_file_config};
use glint_kernel::domain::codes::CodeFlag;
use glint_kernel::domain::config::Configuration;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let cfg: Configuration = load_config(Some(tmp.path().join("absent.toml")))?;
    assert_eq!(cfg, Configuration::default());
    Ok(())
}

#[test]
fn malformed_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("codes.toml");
    std::fs::write(&path, "enabled_codes = \"lots\"\n")?;

    let cfg: Result<Configuration, _> = load_config(Some(&path));
    assert!(cfg.is_err());
    let cfg: Result<Configuration, _> = load_file_config(Some(&path));
    assert!(cfg.is_err());
    Ok(())
}

#[test]
fn file_layer_reads_the_stored_values() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("codes.toml");
    std::fs::write(&path, "enabled_codes = 32776\nshow_debug_codes = true\n")?;

    let cfg: Configuration = load_file_config(Some(&path))?;
    assert_eq!(cfg.enabled_codes, CodeFlag::DWARF | CodeFlag::SHIRTS);
    assert!(cfg.show_debug_codes);
    Ok(())
}
