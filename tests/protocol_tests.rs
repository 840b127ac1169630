//! Integration tests for the relay protocol: one engine plays, the other
//! rebuilds a mirror view from the message stream

use tetris_core::core::{Engine, FixedShapes};
use tetris_core::protocol::{decode, encode, RelayMessage};
use tetris_core::types::{Command, GameConfig, ShapeKind};

#[test]
fn test_ready_up_then_start_handshake() {
    let lines = [
        encode(&RelayMessage::ReadyUp { seed: 1001 }).unwrap(),
        encode(&RelayMessage::StartGame { seed: 1001 }).unwrap(),
    ];

    let RelayMessage::ReadyUp { seed } = decode(&lines[0]).unwrap() else {
        panic!("expected ready_up");
    };
    let RelayMessage::StartGame { seed: started } = decode(&lines[1]).unwrap() else {
        panic!("expected start_game");
    };
    assert_eq!(seed, started);

    // Both peers start from the relayed seed and agree on the first piece
    let mut a = Engine::new(GameConfig::default());
    let mut b = Engine::new(GameConfig::default());
    a.start(started);
    b.start(started);
    assert_eq!(
        a.active().unwrap().kind(),
        b.active().unwrap().kind()
    );
}

#[test]
fn test_board_message_mirrors_the_sender() {
    let mut engine = Engine::new(GameConfig::default());
    engine.start_with_source(Box::new(FixedShapes::new(vec![ShapeKind::O])));
    engine.apply(Command::HardDrop);
    engine.tick();

    let line = encode(&RelayMessage::Board {
        cells: engine.board().to_grid(),
    })
    .unwrap();

    let RelayMessage::Board { cells } = decode(&line).unwrap() else {
        panic!("expected board");
    };
    assert_eq!(cells, engine.board().to_grid());
    assert_eq!(cells[15][4], ShapeKind::O.number());
}

#[test]
fn test_piece_messages_carry_position_and_orientation() {
    let mut engine = Engine::new(GameConfig::default());
    engine.start_with_source(Box::new(FixedShapes::new(vec![
        ShapeKind::T,
        ShapeKind::I,
    ])));
    engine.apply(Command::MoveLeft);
    engine.apply(Command::SoftDrop);

    let snapshot = engine.snapshot();
    let active = encode(&RelayMessage::ActivePiece {
        piece: snapshot.active.clone().unwrap(),
    })
    .unwrap();
    let next = encode(&RelayMessage::NextPiece {
        piece: snapshot.next.clone().unwrap(),
    })
    .unwrap();

    let RelayMessage::ActivePiece { piece } = decode(&active).unwrap() else {
        panic!("expected active_piece");
    };
    assert_eq!(piece.kind, ShapeKind::T);
    assert_eq!((piece.x, piece.y), (3, 1));

    let RelayMessage::NextPiece { piece } = decode(&next).unwrap() else {
        panic!("expected next_piece");
    };
    assert_eq!(piece.kind, ShapeKind::I);
}

#[test]
fn test_score_and_status_messages() {
    let mut engine = Engine::new(GameConfig::default());
    engine.start(5);

    let score_line = encode(&RelayMessage::Score {
        score: engine.snapshot().score,
    })
    .unwrap();
    let RelayMessage::Score { score } = decode(&score_line).unwrap() else {
        panic!("expected score");
    };
    assert_eq!(score.points, 0);
    assert_eq!(score.level, 0);

    let status_line = encode(&RelayMessage::GameStatus {
        game_over: engine.game_over(),
    })
    .unwrap();
    assert_eq!(
        decode(&status_line).unwrap(),
        RelayMessage::GameStatus { game_over: false }
    );
}

#[test]
fn test_unknown_or_damaged_lines_error_cleanly() {
    assert!(decode(r#"{"type":"emote","emoji":"+1"}"#).is_err());
    assert!(decode(r#"{"seed":1}"#).is_err());
    assert!(decode("").is_err());
}
