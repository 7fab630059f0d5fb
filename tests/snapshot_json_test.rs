//! Render snapshots serialize to plain JSON for external consumers.

use blockfall::core::{EngineConfig, GameSnapshot, GameState, ScriptedRandom};
use blockfall::types::Cell;
use serde_json::Value;

fn state() -> GameState<ScriptedRandom> {
    GameState::new(EngineConfig::default(), ScriptedRandom::new(vec![2, 6, 3])).unwrap()
}

#[test]
fn snapshot_json_shape() {
    let snap = state().snapshot();
    let v: Value = serde_json::to_value(&snap).unwrap();

    assert_eq!(v["width"], 10);
    assert_eq!(v["height"], 20);
    assert_eq!(v["cells"].as_array().map(Vec::len), Some(200));
    assert_eq!(v["cells"][0], "empty");
    assert_eq!(v["score"], 0);
    assert_eq!(v["game_over"], false);

    let active = &v["active"];
    assert_eq!(active["kind"], "t");
    assert_eq!(active["color"], "red");
    assert_eq!(active["x"], 2);
    assert_eq!(active["shape"]["rows"], 2);
    assert_eq!(active["shape"]["cols"], 3);
}

#[test]
fn snapshot_json_reads_back() {
    let mut game = state();
    game.tick();
    let snap = game.snapshot();

    let text = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snap);
    assert_eq!(back.cell(0, 0), Cell::Empty);
    assert!(back.active_covers(3, 1));
}
