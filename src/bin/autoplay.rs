//! Plays a full seeded game and logs every move.
//!
//! Usage: `autoplay [seed] [players]`, e.g. `RUST_LOG=debug autoplay 7 4`.
//! Ticks the session at 60 frames per second of simulated time, the way a
//! render loop would.

use std::time::Duration;

use ladders::core::{GameConfig, GameError, PawnColor};
use ladders::engine::GameSession;
use ladders::events::{EventKind, GameEvent};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_micros(16_667);
const MAX_TURNS: usize = 10_000;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let player_count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(2);

    let mut session = GameSession::new(GameConfig::new(seed));
    for color in PawnColor::ALL.iter().skip(2).take(player_count.saturating_sub(2)) {
        let name = color.as_str().to_uppercase();
        if let Err(err) = session.add_player(name, *color) {
            tracing::warn!(%err, "player not added");
        }
    }

    let _ = session.add_event_listener(EventKind::PlayerKilled, |event| {
        if let GameEvent::PlayerKilled { player, by, cell, .. } = event {
            println!("{} captured {} on {}", by.name, player.name, cell);
        }
    });
    let _ = session.add_event_listener(EventKind::GameFinish, |event| {
        println!("{} wins!", event.player().name);
    });

    session.start_game();

    for _ in 0..MAX_TURNS {
        match session.roll_dice() {
            Ok(_) => {}
            Err(GameError::GameFinished) => break,
            Err(err) => {
                tracing::error!(%err, "roll rejected");
                return;
            }
        }

        let record = loop {
            if let Some(record) = session.tick(FRAME) {
                break record;
            }
        };

        println!(
            "{:>6} rolled {} : {:>3} -> {:>3}{}",
            session.players()[record.player.index()].name,
            record.roll.face(),
            record.from,
            record.to,
            if record.overshoot { " (overshoot)" } else { "" }
        );
    }

    tracing::info!(moves = session.history().len(), winner = ?session.winner(), "done");
}
