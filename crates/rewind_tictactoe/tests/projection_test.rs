//! Tests for the read-only view consumed by front-ends.

use rewind_tictactoe::{Game, MoveEntry, SortOrder};

#[test]
fn test_move_list_labels_follow_current_move() {
    let mut game = Game::new();
    game.play(0);
    game.play(4);
    game.jump_to(1).unwrap_or_else(|e| panic!("{e}"));

    let labels: Vec<String> = game.move_list().into_iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start".to_string(),
            "You are at move #1".to_string(),
            "Go to move #2 (1, 1)".to_string(),
        ]
    );
}

#[test]
fn test_descending_projection() {
    let mut game = Game::with_sort_order(SortOrder::Descending);
    game.play(8);

    let projection = game.projection();
    assert!(!projection.sort_ascending);
    assert_eq!(
        projection.move_list,
        vec![
            MoveEntry::new("You are at move #1".to_string(), 1, true),
            MoveEntry::new("Go to game start".to_string(), 0, false),
        ]
    );
}

#[test]
fn test_projection_serializes_to_json() {
    let mut game = Game::new();
    game.play(0);

    let json = serde_json::to_value(game.projection()).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(json["status"], "Next player: O");
    assert_eq!(json["sort_ascending"], true);
    assert_eq!(json["move_list"][1]["label"], "You are at move #1");
    assert_eq!(json["winning_line"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_sort_order_from_lowercase_name() {
    let order: SortOrder = serde_json::from_str("\"descending\"").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(order, SortOrder::Descending);
}
