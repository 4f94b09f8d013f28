//! Command handlers

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::info;

use crate::cli::{Cli, Commands, ConfigArgs, OutputFormat};
use crate::output::{output_cards, output_selection, CardListing};
use skipsize_app::config::Config;
use skipsize_app::loader::SizeLoader;
use skipsize_app::repository::open_size_source;
use skipsize_domain::service::{SelectOutcome, SizePicker};
use skipsize_types::{Error, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, &cli);
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::List {
            heavy_waste,
            selected,
        } => cmd_list(&config, *heavy_waste, *selected, output_format),

        Commands::Select {
            id,
            heavy_waste,
            selected,
        } => cmd_select(&config, *id, *heavy_waste, *selected, output_format),

        Commands::Config(args) => cmd_config(args),
    }
}

/// Layer the global `--postcode/--area/--catalogue` flags over the loaded config
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref postcode) = cli.postcode {
        config.postcode = postcode.clone();
    }
    if let Some(ref area) = cli.area {
        config.area = area.clone();
    }
    if cli.catalogue.is_some() {
        config.catalogue_path = cli.catalogue.clone();
    }
}

/// Fetch the sizes and build a picker around them
fn load_picker(
    config: &Config,
    heavy_waste: bool,
    selected: Option<u32>,
    on_select: impl FnMut(u32) + 'static,
) -> Result<(SizePicker, DateTime<Utc>)> {
    let source = open_size_source(config)?;
    let location = config.location();
    info!("Fetching skip sizes for {}", location);

    let loaded = SizeLoader::spawn(source, location).wait();
    let mut picker = SizePicker::new(on_select)
        .with_initial_size(selected)
        .with_heavy_waste(heavy_waste);
    picker.load_sizes(loaded.sizes);
    Ok((picker, loaded.loaded_at))
}

fn cmd_list(
    config: &Config,
    heavy_waste: bool,
    selected: Option<u32>,
    output_format: OutputFormat,
) -> Result<()> {
    let (picker, loaded_at) = load_picker(config, heavy_waste, selected, |_| {})?;
    let cards = picker.cards();
    let listing = CardListing {
        location: config.location().to_string(),
        loaded_at,
        cards: &cards,
    };
    output_cards(output_format, &listing)
}

fn cmd_select(
    config: &Config,
    id: u32,
    heavy_waste: bool,
    selected: Option<u32>,
    output_format: OutputFormat,
) -> Result<()> {
    let chosen = Rc::new(Cell::new(None));
    let sink = Rc::clone(&chosen);
    let (mut picker, _) = load_picker(config, heavy_waste, selected, move |id| sink.set(Some(id)))?;

    let outcome = picker.select(id);
    output_selection(output_format, outcome, picker.selected(), chosen.get())?;

    match outcome {
        SelectOutcome::Selected(_) | SelectOutcome::Unchanged(_) => Ok(()),
        SelectOutcome::RejectedHeavyWaste(id) => Err(Error::HeavyWasteUnsuitable(id)),
        SelectOutcome::UnknownSize(id) => Err(Error::UnknownSize(id)),
    }
}

/// Apply `config --set-*` values. Returns whether anything changed.
fn apply_config_args(config: &mut Config, args: &ConfigArgs) -> Result<bool> {
    let mut modified = false;

    if let Some(ref postcode) = args.set_postcode {
        config.postcode = postcode.clone();
        modified = true;
    }

    if let Some(ref area) = args.set_area {
        config.area = area.clone();
        modified = true;
    }

    if let Some(ref api_url) = args.set_api_url {
        config.api_base_url = api_url.clone();
        modified = true;
    }

    if let Some(ref catalogue) = args.set_catalogue {
        config.catalogue_path = Some(catalogue.clone());
        modified = true;
    }

    if args.clear_catalogue {
        config.catalogue_path = None;
        modified = true;
    }

    if let Some(ref timeout) = args.set_timeout {
        config.set_timeout(timeout)?;
        modified = true;
    }

    if let Some(format) = args.set_format {
        config.output_format = format;
        modified = true;
    }

    Ok(modified)
}

fn cmd_config(args: &ConfigArgs) -> Result<()> {
    if args.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let modified = apply_config_args(&mut config, args)?;

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if args.show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn config_args(args: &[&str]) -> ConfigArgs {
        match parse(args).command {
            Commands::Config(args) => args,
            _ => panic!("expected config command"),
        }
    }

    fn record_json(id: u32, allows_heavy_waste: bool) -> String {
        format!(
            r#"{{"id": {id}, "size": 8, "hire_period_days": 14, "transport_cost": null,
                "per_tonne_cost": null, "price_before_vat": 375, "vat": 20,
                "postcode": "NR32", "area": "Lowestoft", "forbidden": false,
                "allowed_on_road": true, "allows_heavy_waste": {allows_heavy_waste}}}"#
        )
    }

    /// Catalogue with a heavy-waste skip (#1) and one that is not (#2)
    fn catalogue_config() -> (NamedTempFile, Config) {
        let mut file = NamedTempFile::new().unwrap();
        let json = format!("[{}, {}]", record_json(1, true), record_json(2, false));
        file.write_all(json.as_bytes()).unwrap();
        let config = Config {
            catalogue_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        (file, config)
    }

    #[test]
    fn test_select_accepted() {
        let (_file, config) = catalogue_config();
        let result = cmd_select(&config, 2, false, None, OutputFormat::Json);
        assert!(result.is_ok());
    }

    #[test]
    fn test_select_rejected_for_heavy_waste() {
        let (_file, config) = catalogue_config();
        let result = cmd_select(&config, 2, true, Some(1), OutputFormat::Json);
        assert!(matches!(result, Err(Error::HeavyWasteUnsuitable(2))));
    }

    #[test]
    fn test_select_unknown_size() {
        let (_file, config) = catalogue_config();
        let result = cmd_select(&config, 42, false, None, OutputFormat::Table);
        assert!(matches!(result, Err(Error::UnknownSize(42))));
    }

    #[test]
    fn test_list_from_catalogue() {
        let (_file, config) = catalogue_config();
        assert!(cmd_list(&config, true, Some(1), OutputFormat::Json).is_ok());
    }

    #[test]
    fn test_global_flags_override_config() {
        let cli = parse(&[
            "skipsize",
            "--postcode",
            "LE10",
            "--area",
            "Hinckley",
            "--catalogue",
            "/tmp/sizes.json",
            "list",
        ]);
        let mut config = Config::default();
        config.api_base_url = "http://localhost:9000/api".to_string();

        apply_overrides(&mut config, &cli);

        assert_eq!(config.postcode, "LE10");
        assert_eq!(config.area, "Hinckley");
        assert_eq!(config.catalogue_path, Some(PathBuf::from("/tmp/sizes.json")));
        assert_eq!(config.api_base_url, "http://localhost:9000/api");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = parse(&["skipsize", "select", "3", "--heavy-waste"]);
        let mut config = Config {
            postcode: "LE10".to_string(),
            ..Config::default()
        };

        apply_overrides(&mut config, &cli);

        assert_eq!(config.postcode, "LE10");
        assert_eq!(config.area, "Lowestoft");
        assert_eq!(config.catalogue_path, None);
    }

    #[test]
    fn test_clear_catalogue_keeps_other_settings() {
        let mut config = Config {
            postcode: "LE10".to_string(),
            area: "Hinckley".to_string(),
            catalogue_path: Some(PathBuf::from("/tmp/sizes.json")),
            timeout_secs: Some(20),
            ..Config::default()
        };

        let args = config_args(&["skipsize", "config", "--clear-catalogue"]);
        assert!(apply_config_args(&mut config, &args).unwrap());

        assert_eq!(config.catalogue_path, None);
        assert_eq!(config.postcode, "LE10");
        assert_eq!(config.area, "Hinckley");
        assert_eq!(config.timeout_secs, Some(20));
    }

    #[test]
    fn test_set_and_clear_catalogue_conflict() {
        let result = Cli::try_parse_from([
            "skipsize",
            "config",
            "--set-catalogue",
            "/tmp/sizes.json",
            "--clear-catalogue",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_config_values() {
        let mut config = Config::default();
        let args = config_args(&[
            "skipsize",
            "config",
            "--set-postcode",
            "LE10",
            "--set-catalogue",
            "/tmp/sizes.json",
            "--set-timeout",
            "15",
            "--set-format",
            "json",
        ]);

        assert!(apply_config_args(&mut config, &args).unwrap());
        assert_eq!(config.postcode, "LE10");
        assert_eq!(config.catalogue_path, Some(PathBuf::from("/tmp/sizes.json")));
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_show_only_changes_nothing() {
        let mut config = Config::default();
        let args = config_args(&["skipsize", "config", "--show"]);
        assert!(!apply_config_args(&mut config, &args).unwrap());
        assert_eq!(config, Config::default());
    }
}
