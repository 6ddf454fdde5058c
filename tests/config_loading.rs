use fuel_pricing::config::load_config;
use fuel_pricing::pricing::StrategyKind;
use std::io::Write;

fn write_config(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_missing_file_uses_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = load_config(&dir.path().join("absent.toml"))?;

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "text");
    assert_eq!(config.report.currency_symbol, "R");
    assert_eq!(config.report.strategy_kind()?, StrategyKind::Fixed);
    assert_eq!(config.scenarios.len(), 3);
    assert_eq!(config.scenarios[1].country, "zimbabwe");
    Ok(())
}

#[test]
fn test_load_config_from_file() -> anyhow::Result<()> {
    let file = write_config(
        r#"
        [logging]
        level = "debug"
        format = "json"

        [report]
        currency_symbol = "P"
        strategy = "dynamic"

        [[scenarios]]
        tier = 3
        country = "botswana"
        grid_location = "inland"
        "#,
    )?;

    let config = load_config(file.path())?;

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.report.currency_symbol, "P");
    assert_eq!(config.report.strategy_kind()?, StrategyKind::Dynamic);
    assert_eq!(config.scenarios.len(), 1);

    let request = config.scenarios[0].to_request()?;
    assert_eq!(request.tier.get(), 3);
    Ok(())
}

#[test]
fn test_partial_file_keeps_other_defaults() -> anyhow::Result<()> {
    let file = write_config(
        r#"
        [report]
        strategy = "dynamic"
        "#,
    )?;

    let config = load_config(file.path())?;

    assert_eq!(config.report.currency_symbol, "R");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.scenarios.len(), 3);
    Ok(())
}

#[test]
fn test_invalid_scenario_is_rejected() -> anyhow::Result<()> {
    let file = write_config(
        r#"
        [[scenarios]]
        tier = 15
        country = "zimbabwe"
        grid_location = "inland"
        "#,
    )?;

    let result = load_config(file.path());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("invalid tier: '15'"));
    Ok(())
}

#[test]
fn test_invalid_log_format_is_rejected() -> anyhow::Result<()> {
    let file = write_config(
        r#"
        [logging]
        format = "xml"
        "#,
    )?;

    assert!(load_config(file.path()).is_err());
    Ok(())
}
