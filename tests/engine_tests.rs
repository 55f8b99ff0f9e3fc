//! Move sequence integration tests.
//!
//! These tests drive a session the way the presentation layer does:
//! commands, per-frame ticks, and event listeners.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use ladders::board::{Board, Transition};
use ladders::core::{DiceRoll, GameConfig, GameError, GameRng, PawnColor, Player, PlayerId};
use ladders::engine::{GameSession, GameSnapshot, MoveRecord, PendingMove};
use ladders::events::{EventKind, GameEvent};

/// A started session with pawns on the given cells, Red to move.
fn session_at(config: GameConfig, positions: &[u8]) -> GameSession {
    let snapshot = snapshot_at(&config, positions);
    GameSession::from_snapshot(config, snapshot)
}

fn snapshot_at(config: &GameConfig, positions: &[u8]) -> GameSnapshot {
    GameSnapshot {
        players: positions
            .iter()
            .zip(PawnColor::ALL)
            .map(|(&cell, color)| Player::new(color.as_str(), color).at(cell))
            .collect(),
        dice_roll: None,
        current_player: PlayerId::new(0),
        started: true,
        winner: None,
        pending: None,
        rng: GameRng::new(config.seed).state(),
    }
}

fn play(session: &mut GameSession, face: u8) -> MoveRecord {
    session.roll_with(DiceRoll::exact(face)).unwrap();
    session.resolve_pending().unwrap()
}

fn record_events(session: &mut GameSession, kind: EventKind) -> Rc<RefCell<Vec<GameEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let _ = session.add_event_listener(kind, move |event| sink.borrow_mut().push(event.clone()));
    events
}

/// A@0, B@0; A rolls 4 onto the ladder and ends on 25; B is next.
#[test]
fn test_ladder_scenario() {
    let mut session = GameSession::new(GameConfig::new(1));
    session.start_game();

    session.roll_with(DiceRoll::new(4, 0.07)).unwrap();
    assert_eq!(session.players()[0].position, 4, "provisional move is visible");

    let record = session.tick(Duration::from_secs(1)).unwrap();

    assert_eq!(record.to, 25);
    assert_eq!(session.players()[0].position, 25);
    assert_eq!(session.players()[1].position, 0);
    assert_eq!(session.current_player(), PlayerId::new(1));
}

/// A@94, B@27; A rolls 6, reaches 100 and wins; the turn stays with A.
#[test]
fn test_winning_scenario() {
    let mut session = session_at(GameConfig::new(1), &[94, 27]);
    let finishes = record_events(&mut session, EventKind::GameFinish);

    let record = play(&mut session, 6);

    assert!(record.won);
    assert_eq!(record.to, 100);
    assert_eq!(session.current_player(), PlayerId::new(0));
    assert_eq!(session.winner(), Some(PlayerId::new(0)));

    let finishes = finishes.borrow();
    assert_eq!(finishes.len(), 1);
    assert_eq!(finishes[0].player().name, "red");
    assert_eq!(finishes[0].player().position, 100);

    // A finished game takes no more rolls
    assert_eq!(session.roll_dice(), Err(GameError::GameFinished));
}

#[test]
fn test_game_finish_fires_once() {
    let mut session = session_at(GameConfig::new(1), &[98, 0]);
    let finishes = record_events(&mut session, EventKind::GameFinish);

    play(&mut session, 2);
    let _ = session.roll_with(DiceRoll::exact(1));
    let _ = session.resolve_pending();
    session.tick(Duration::from_secs(3));

    assert_eq!(finishes.borrow().len(), 1);
}

#[test]
fn test_overshoot_forfeits_movement() {
    let mut session = session_at(GameConfig::new(1), &[96, 10]);

    let record = play(&mut session, 6);

    assert!(record.overshoot);
    assert_eq!(session.players()[0].position, 96);
    assert_eq!(session.current_player(), PlayerId::new(1));

    // Exact roll later still wins
    play(&mut session, 1);
    let record = play(&mut session, 4);
    assert!(record.won);
}

#[test]
fn test_snake_scenario() {
    let mut session = session_at(GameConfig::new(1), &[41, 0]);

    let record = play(&mut session, 2);

    assert_eq!(record.provisional, 43);
    assert_eq!(record.to, 18);
    assert!(record.slid());
}

#[test]
fn test_no_chaining_on_custom_board() {
    // 43 slides to 18, and 18 is itself a ladder foot
    let board = Board::new(100, [Transition::snake(43, 18), Transition::ladder(18, 31)]).unwrap();
    let mut session = session_at(GameConfig::new(1).with_board(board), &[40, 0]);

    let record = play(&mut session, 3);

    assert_eq!(record.to, 18);
    assert_eq!(session.players()[0].position, 18);
}

#[test]
fn test_capture_scenario() {
    let mut session = session_at(GameConfig::new(1), &[20, 23]);
    let kills = record_events(&mut session, EventKind::PlayerKilled);

    let record = play(&mut session, 3);

    assert_eq!(record.captured.as_slice(), &[PlayerId::new(1)]);
    assert_eq!(session.players()[1].position, 0);

    let kills = kills.borrow();
    assert_eq!(kills.len(), 1);
    match &kills[0] {
        GameEvent::PlayerKilled { player_id, player, by_id, by, cell } => {
            assert_eq!(*player_id, PlayerId::new(1));
            assert_eq!(player.name, "blue");
            assert_eq!(player.position, 23);
            assert_eq!(*by_id, PlayerId::new(0));
            assert_eq!(by.name, "red");
            assert_eq!(*cell, 23);
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_capture_after_ladder_uses_resolved_cell() {
    // Blue waits at the top of the 4 -> 25 ladder
    let mut session = session_at(GameConfig::new(1), &[0, 25, 4]);
    let kills = record_events(&mut session, EventKind::PlayerKilled);

    let record = play(&mut session, 4);

    assert_eq!(record.to, 25);
    assert_eq!(record.captured.as_slice(), &[PlayerId::new(1)]);
    // Yellow sat on the ladder foot, not the resolved cell
    assert_eq!(session.players()[2].position, 4);
    assert_eq!(kills.borrow().len(), 1);
}

#[test]
fn test_capture_two_pawns_on_one_cell() {
    let config = GameConfig::new(1).with_capture(false);
    let mut session = session_at(config, &[5, 11, 11]);

    session.set_capture_enabled(true);
    let kills = record_events(&mut session, EventKind::PlayerKilled);

    let record = play(&mut session, 6);

    assert_eq!(record.to, 11);
    assert_eq!(record.captured.as_slice(), &[PlayerId::new(1), PlayerId::new(2)]);
    assert_eq!(session.players()[1].position, 0);
    assert_eq!(session.players()[2].position, 0);

    let victims: Vec<_> = kills
        .borrow()
        .iter()
        .map(|e| match e {
            GameEvent::PlayerKilled { player_id, .. } => *player_id,
            GameEvent::GameFinish { .. } => unreachable!(),
        })
        .collect();
    assert_eq!(victims, vec![PlayerId::new(1), PlayerId::new(2)]);
}

#[test]
fn test_capture_disabled_allows_sharing() {
    let mut session = session_at(GameConfig::new(1).with_capture(false), &[20, 23]);
    let kills = record_events(&mut session, EventKind::PlayerKilled);

    play(&mut session, 3);

    assert_eq!(session.players()[0].position, 23);
    assert_eq!(session.players()[1].position, 23);
    assert!(kills.borrow().is_empty());
}

#[test]
fn test_round_robin_turns() {
    let mut session = GameSession::new(GameConfig::new(1));
    session.add_player("Yellow", PawnColor::Yellow).unwrap();
    session.start_game();

    let mut order = Vec::new();
    for _ in 0..7 {
        order.push(session.current_player().index());
        play(&mut session, 1);
    }

    assert_eq!(order, vec![0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn test_roster_limit() {
    let mut session = GameSession::default();

    for color in [PawnColor::Yellow, PawnColor::Green, PawnColor::Red, PawnColor::Blue] {
        let _ = session.add_player(color.as_str(), color);
    }

    assert_eq!(session.player_count(), 4);
    assert_eq!(
        session.add_player("Fifth", PawnColor::Green),
        Err(GameError::RosterFull { max: 4 })
    );
}

#[test]
fn test_custom_roster_limit() {
    let mut session = GameSession::new(GameConfig::new(1).with_max_players(3));

    assert!(session.add_player("Yellow", PawnColor::Yellow).is_ok());
    assert!(session.add_player("Green", PawnColor::Green).is_err());
}

#[test]
fn test_start_game_resets_positions() {
    let mut session = session_at(GameConfig::new(1), &[30, 60]);

    session.start_game();

    assert!(session.is_started());
    assert!(session.players().iter().all(|p| p.position == 0));
}

#[test]
fn test_restart_then_roll_is_noop() {
    let mut session = session_at(GameConfig::new(1), &[30, 60]);
    play(&mut session, 2);

    session.restart_game();

    assert!(!session.is_started());
    assert_eq!(session.current_player(), PlayerId::new(0));
    assert_eq!(session.dice_roll(), None);
    assert!(session.players().iter().all(|p| p.position == 0));

    assert_eq!(session.roll_dice(), Err(GameError::NotStarted));
    assert!(session.pending_move().is_none());
    assert_eq!(session.dice_roll(), None);
}

#[test]
fn test_reset_after_win_allows_play() {
    let mut session = session_at(GameConfig::new(1), &[99, 0]);
    play(&mut session, 1);
    assert!(session.is_finished());

    session.reset_game();

    assert!(!session.is_finished());
    assert!(session.is_started());
    assert!(session.roll_dice().is_ok());
}

#[test]
fn test_overlapping_rolls_rejected_until_resolved() {
    let mut session = GameSession::new(GameConfig::new(9));
    session.start_game();

    let first = session.roll_dice().unwrap();
    assert_eq!(session.roll_dice(), Err(GameError::MovePending));
    assert_eq!(session.dice_roll(), Some(first));

    session.tick(Duration::from_secs(1));
    assert!(session.roll_dice().is_ok());
}

#[test]
fn test_zero_delay_resolves_on_next_tick() {
    let config = GameConfig::new(1).with_resolution_delay(Duration::ZERO);
    let mut session = session_at(config, &[0, 0]);

    session.roll_with(DiceRoll::exact(4)).unwrap();
    let record = session.tick(Duration::ZERO).unwrap();

    assert_eq!(record.to, 25);
}

#[test]
fn test_history_tracks_moves() {
    let mut session = session_at(GameConfig::new(1), &[0, 0]);

    play(&mut session, 4);
    play(&mut session, 2);

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, PlayerId::new(0));
    assert_eq!(history[0].to, 25);
    assert_eq!(history[1].player, PlayerId::new(1));
    assert_eq!(history[1].to, 2);
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let run = |seed| {
        let mut session = GameSession::new(GameConfig::new(seed));
        session.start_game();
        for _ in 0..40 {
            if session.roll_dice().is_err() {
                break;
            }
            session.resolve_pending().unwrap();
        }
        session.snapshot()
    };

    assert_eq!(run(123), run(123));
}

/// A restored session keeps rolling the dice the original would have rolled.
#[test]
fn test_restored_session_continues_dice_sequence() {
    let config = GameConfig::new(77);
    let mut original = GameSession::new(config.clone());
    original.start_game();
    for _ in 0..5 {
        original.roll_dice().unwrap();
        original.resolve_pending().unwrap();
    }

    let mut restored = GameSession::from_snapshot(config, original.snapshot());
    assert_eq!(restored.snapshot(), original.snapshot());

    for _ in 0..10 {
        let expected = original.roll_dice();
        assert_eq!(restored.roll_dice(), expected);
        if expected.is_err() {
            break;
        }
        assert_eq!(restored.resolve_pending(), original.resolve_pending());
    }
}

/// A reset mid-move completes the move: its turn advance is kept.
#[test]
fn test_reset_completes_pending_move() {
    let mut session = session_at(GameConfig::new(1), &[0, 0]);

    session.roll_with(DiceRoll::exact(4)).unwrap();
    session.reset_game();

    assert!(session.pending_move().is_none());
    assert_eq!(session.current_player(), PlayerId::new(1));
    assert!(session.players().iter().all(|p| p.position == 0));
    assert_eq!(session.history().last().map(|r| r.to), Some(25));
    assert!(session.tick(Duration::from_secs(2)).is_none());
}

/// A pawn captured by a move finished during a reset still goes home.
#[test]
fn test_start_game_completes_pending_capture() {
    let mut session = session_at(GameConfig::new(1), &[20, 23]);
    let kills = record_events(&mut session, EventKind::PlayerKilled);

    session.roll_with(DiceRoll::exact(3)).unwrap();
    session.start_game();

    assert_eq!(kills.borrow().len(), 1);
    assert_eq!(session.current_player(), PlayerId::new(1));
}

#[test]
#[should_panic(expected = "Current player not on the roster")]
fn test_snapshot_with_unknown_current_player_panics() {
    let config = GameConfig::default();
    let snapshot = GameSnapshot {
        current_player: PlayerId::new(5),
        ..snapshot_at(&config, &[0, 0])
    };
    let _ = GameSession::from_snapshot(config, snapshot);
}

#[test]
#[should_panic(expected = "Pending move past the winning cell")]
fn test_snapshot_with_pending_move_off_board_panics() {
    let config = GameConfig::default();
    let snapshot = GameSnapshot {
        pending: Some(PendingMove {
            player: PlayerId::new(0),
            roll: DiceRoll::exact(6),
            from: 90,
            provisional: 180,
            overshoot: false,
            elapsed: Duration::ZERO,
        }),
        ..snapshot_at(&config, &[90, 0])
    };
    let _ = GameSession::from_snapshot(config, snapshot);
}

#[test]
#[should_panic(expected = "Pending mover is not on the provisional cell")]
fn test_snapshot_with_detached_pending_move_panics() {
    let config = GameConfig::default();
    let snapshot = GameSnapshot {
        pending: Some(PendingMove {
            player: PlayerId::new(0),
            roll: DiceRoll::exact(2),
            from: 10,
            provisional: 12,
            overshoot: false,
            elapsed: Duration::ZERO,
        }),
        ..snapshot_at(&config, &[10, 0])
    };
    let _ = GameSession::from_snapshot(config, snapshot);
}
