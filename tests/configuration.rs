use std::fs;
use std::path::PathBuf;

use ljets_core::config::{ConfigError, Configuration};
use ljets_core::objects::BTagWorkingPoint;
use ljets_core::output::output_directory;
use log::LevelFilter;
use tempfile::tempdir;

const EXAMPLE_CFG: &str = include_str!("../config/example.cfg");

#[test]
fn missing_keys_fall_back_to_defaults() {
    let config = Configuration::parse("").unwrap();

    assert_eq!(config.selections(), vec!["none"]);
    assert_eq!(config.cutsfiles(), vec![PathBuf::from("config/cuts_none.txt")]);
    assert_eq!(config.n_events().unwrap(), None);
    assert_eq!(config.first_event().unwrap(), 0);
    assert_eq!(config.btag_working_point().unwrap(), BTagWorkingPoint::Medium);
    assert_eq!(config.custom_directory(), "");
    assert_eq!(config.verbose_level(), LevelFilter::Info);
    assert_eq!(config.mujets_triggers(), vec!["HLT_Mu50", "HLT_TkMu50"]);
    assert_eq!(config.ejets_triggers().len(), 3);
}

#[test]
fn example_configuration_parses() {
    let config = Configuration::parse(EXAMPLE_CFG).unwrap();

    assert_eq!(config.selections(), vec!["cwolaejets"]);
    assert_eq!(
        config.cutsfiles(),
        vec![PathBuf::from("config/cuts_cwolaejets.txt")]
    );
    assert_eq!(config.custom_directory(), "_test");
    assert_eq!(config.output_path(), PathBuf::from("./output"));
    assert_eq!(
        output_directory(&config, "cwolaejets"),
        PathBuf::from("./output/cwolaejets_test")
    );
}

#[test]
fn unknown_option_returns_empty_string() {
    let config = Configuration::parse("selection cwola").unwrap();
    assert_eq!(config.get_option("doesNotExist"), "");
}

#[test]
fn comma_separated_lists_are_trimmed() {
    let config = Configuration::parse(
        "selection cwolaejets, cwolamujets\n\
         cutsfile config/cuts_cwolaejets.txt,config/cuts_cwolamujets.txt\n",
    )
    .unwrap();

    assert_eq!(config.selections(), vec!["cwolaejets", "cwolamujets"]);
    assert_eq!(config.cutsfiles().len(), 2);
}

#[test]
fn event_window_is_read_as_integers() {
    let config = Configuration::parse("NEvents 250\nfirstEvent 10  # skip warm-up").unwrap();
    assert_eq!(config.n_events().unwrap(), Some(250));
    assert_eq!(config.first_event().unwrap(), 10);

    let bad = Configuration::parse("NEvents lots").unwrap();
    assert!(matches!(
        bad.n_events().unwrap_err(),
        ConfigError::InvalidNumber { ref key, .. } if key == "NEvents"
    ));

    let negative = Configuration::parse("firstEvent -3").unwrap();
    assert!(negative.first_event().is_err());
}

#[test]
fn unsupported_working_point_fails_at_parse() {
    let err = Configuration::parse("jet_btag_wkpt X").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownWorkingPoint(_)));

    for wp in BTagWorkingPoint::ALL {
        let config = Configuration::parse(&format!("jet_btag_wkpt {wp}")).unwrap();
        assert_eq!(config.btag_working_point().unwrap(), wp);
    }
}

#[test]
fn verbose_levels_map_to_log_filters() {
    let cases = [
        ("DEBUG", LevelFilter::Debug),
        ("INFO", LevelFilter::Info),
        ("WARNING", LevelFilter::Warn),
        ("ERROR", LevelFilter::Error),
        ("CHATTY", LevelFilter::Info),
    ];
    for (level, expected) in cases {
        let config = Configuration::parse(&format!("verboseLevel {level}")).unwrap();
        assert_eq!(config.verbose_level(), expected, "level {level}");
    }
}

#[test]
fn custom_directory_keeps_existing_underscore() {
    let config = Configuration::parse("customDirectory _v2").unwrap();
    assert_eq!(config.custom_directory(), "_v2");
}

#[test]
fn mc_datasets_are_recognized() {
    assert!(Configuration::is_mc_dataset(
        "TT_TuneCUETP8M2T4_13TeV-powheg-pythia8"
    ));
    assert!(!Configuration::is_mc_dataset("SingleElectron"));
}

#[test]
fn reads_configuration_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.cfg");
    fs::write(&path, EXAMPLE_CFG).unwrap();

    let from_disk = Configuration::from_path(&path).unwrap();
    assert_eq!(from_disk, Configuration::parse(EXAMPLE_CFG).unwrap());

    assert!(matches!(
        Configuration::from_path(&dir.path().join("missing.cfg")).unwrap_err(),
        ConfigError::Io(_)
    ));
}
