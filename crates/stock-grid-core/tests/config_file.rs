// File: crates/stock-grid-core/tests/config_file.rs
// Purpose: GridConfig loads from partial TOML with defaults and validation.

use stock_grid_core::GridConfig;

#[test]
fn partial_toml_fills_defaults() -> anyhow::Result<()> {
    let c: GridConfig = toml::from_str("column_count = 6\nmargin = 2.5\n")?;
    assert_eq!(c.column_count(), 6);
    assert_eq!(c.top_row_count(), 4);
    assert_eq!(c.bottom_row_count(), 2);
    assert_eq!(c.margin(), 2.5);
    assert_eq!(c.dash().phase, 1.0);
    Ok(())
}

#[test]
fn dash_table() -> anyhow::Result<()> {
    let c: GridConfig = toml::from_str("[dash]\nintervals = [3.0, 1.0]\n")?;
    assert_eq!(c.dash().intervals, vec![3.0, 1.0]);
    assert_eq!(c.dash().phase, 0.0);
    Ok(())
}

#[test]
fn invalid_values_are_rejected() {
    assert!(toml::from_str::<GridConfig>("top_row_count = 0").is_err());
    assert!(toml::from_str::<GridConfig>("margin = -1.0").is_err());
    assert!(toml::from_str::<GridConfig>("[dash]\nintervals = [1.0]").is_err());
}

#[test]
fn round_trips_through_toml() -> anyhow::Result<()> {
    let c = GridConfig::new(5, 6, 3, 1.5)?;
    let text = toml::to_string(&c)?;
    let back: GridConfig = toml::from_str(&text)?;
    assert_eq!(back, c);
    Ok(())
}
