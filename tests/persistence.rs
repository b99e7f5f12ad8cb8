//! Value-table persistence across the file-backed repositories.

mod common;

use std::fs;

use tempfile::TempDir;
use tictactoe_td::{
    Error,
    adapters::{FileRepository, JsonRepository, MsgPackRepository},
    agents::RandomAgent,
    app::TdConfig,
    pipeline::GameDriver,
    ports::ValueTableRepository,
    td_learning::{TdLearner, ValueTable},
    tictactoe::{Player, StateId},
};

fn boundary_table() -> ValueTable {
    ValueTable::from_entries([
        (StateId(0), 0.0),
        (StateId(656), 1.0),
        (StateId(78_731), 0.5),
        (StateId(4), 0.1 + 0.2),
    ])
    .unwrap()
}

fn trained_table() -> ValueTable {
    let mut learner = TdLearner::new(Player::X, TdConfig::new().with_seed(3)).unwrap();
    let mut opponent = RandomAgent::with_seed(Player::O, 4);
    let driver = GameDriver::new();
    for _ in 0..200 {
        driver.play(&mut learner, &mut opponent, Player::X).unwrap();
    }
    learner.into_table()
}

fn repositories() -> Vec<(&'static str, Box<dyn ValueTableRepository>)> {
    vec![
        ("table.json", Box::new(JsonRepository::new())),
        ("table.msgpack", Box::new(MsgPackRepository::new())),
        ("table.json", Box::new(FileRepository::new())),
        ("table.mpk", Box::new(FileRepository::new())),
    ]
}

#[test]
fn every_repository_round_trips_exactly() {
    for (file_name, repo) in repositories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(file_name);

        for table in [ValueTable::new(), boundary_table(), trained_table()] {
            repo.save(&table, &path).unwrap();
            let loaded = repo.load(&path).unwrap();
            assert_eq!(loaded, table, "{file_name}");
        }
    }
}

#[test]
fn json_file_is_a_flat_map_of_state_ids() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("learner_player.json");
    JsonRepository::new().save(&boundary_table(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let map = parsed.as_object().unwrap();

    assert_eq!(map.len(), 4);
    assert_eq!(map["0"], serde_json::json!(0.0));
    assert_eq!(map["656"], serde_json::json!(1.0));
    assert_eq!(map["78731"], serde_json::json!(0.5));
}

#[test]
fn hand_written_json_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("table.json");
    fs::write(&path, r#"{"12": 0.75, "13": 0}"#).unwrap();

    let table = JsonRepository::new().load(&path).unwrap();
    assert_eq!(table.get(StateId(12)), Some(0.75));
    assert_eq!(table.get(StateId(13)), Some(0.0));
    assert_eq!(table.value(StateId(14)), 0.5);
}

#[test]
fn missing_file_is_a_persistence_error() {
    let temp_dir = TempDir::new().unwrap();
    for (file_name, repo) in repositories() {
        let err = repo.load(&temp_dir.path().join(file_name)).unwrap_err();
        assert!(matches!(err, Error::Persistence { .. }), "{file_name}: {err}");
    }
}

#[test]
fn corrupt_contents_are_persistence_errors() {
    let temp_dir = TempDir::new().unwrap();
    let repo = JsonRepository::new();
    let cases = [
        ("truncated.json", r#"{"12": 0.5"#),
        ("not_a_map.json", "[0.5, 0.25]"),
        ("bad_key.json", r#"{"twelve": 0.5}"#),
        ("out_of_range.json", r#"{"12": 1.5}"#),
    ];

    for (file_name, contents) in cases {
        let path = temp_dir.path().join(file_name);
        fs::write(&path, contents).unwrap();
        let err = repo.load(&path).unwrap_err();
        assert!(matches!(err, Error::Persistence { .. }), "{file_name}: {err}");
    }

    let path = temp_dir.path().join("garbage.msgpack");
    fs::write(&path, [0xc1, 0xff, 0x00]).unwrap();
    assert!(matches!(
        MsgPackRepository::new().load(&path),
        Err(Error::Persistence { .. })
    ));
}

#[test]
fn loaded_table_drives_a_learner_identically() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("table.json");
    let table = trained_table();
    FileRepository::new().save(&table, &path).unwrap();
    let loaded = FileRepository::new().load(&path).unwrap();

    let config = common::greedy_config().frozen();
    let original = TdLearner::with_table(Player::X, table, config).unwrap();
    let restored = TdLearner::with_table(Player::X, loaded, config).unwrap();

    let position = tictactoe_td::tictactoe::Position::new(Player::X);
    assert_eq!(
        original.action_values(&position).unwrap(),
        restored.action_values(&position).unwrap()
    );
}
