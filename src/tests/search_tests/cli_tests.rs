// src/tests/search_tests/cli_tests.rs

use crate::cli::{Cli, Command, SearchArgs};
use crate::search::SearchCriteria;
use clap::Parser;

#[test]
fn flags_map_onto_criteria() {
    let cli = Cli::parse_from([
        "home_search",
        "search",
        "--city",
        "Austin",
        "--state",
        "TX",
        "--max-price",
        "400000",
        "--longitude",
        "-97.7",
    ]);

    let Command::Search(args) = cli.command else {
        panic!("expected search subcommand");
    };
    let criteria = args.to_criteria().unwrap();

    assert_eq!(criteria.city.as_deref(), Some("Austin"));
    assert_eq!(criteria.state.as_deref(), Some("TX"));
    assert_eq!(criteria.max_price, Some(400_000));
    assert_eq!(criteria.longitude, Some(-97.7));
    assert_eq!(criteria.address, None);
}

#[test]
fn flags_override_json_criteria() {
    let base = SearchCriteria::from_json(r#"{"zip_code": "78704", "beds": 2}"#).unwrap();
    let args = SearchArgs {
        beds: Some(4),
        ..Default::default()
    };

    let merged = args.merge_into(base);

    assert_eq!(merged.zip_code.as_deref(), Some("78704"));
    assert_eq!(merged.beds, Some(4));
}

#[test]
fn api_key_flag_is_not_search_criteria() {
    let cli = Cli::parse_from(["home_search", "search", "--api-key", "abc", "--zip-code", "78704"]);

    let Command::Search(args) = cli.command else {
        panic!("expected search subcommand");
    };

    assert_eq!(args.api_key.as_deref(), Some("abc"));
    assert_eq!(
        args.to_criteria().unwrap(),
        SearchCriteria {
            zip_code: Some("78704".into()),
            ..Default::default()
        }
    );
}

#[test]
fn json_file_criteria_are_read_and_merged() {
    let path = std::env::temp_dir().join(format!("criteria_{}.json", std::process::id()));
    std::fs::write(&path, r#"{"city": "Austin", "state": "TX", "beds": 2}"#).unwrap();
    let args = SearchArgs {
        json: Some(path.clone()),
        max_price: Some(400_000),
        ..Default::default()
    };

    let criteria = args.to_criteria().unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(criteria.city.as_deref(), Some("Austin"));
    assert_eq!(criteria.beds, Some(2));
    assert_eq!(criteria.max_price, Some(400_000));
}
