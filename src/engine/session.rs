//! Game session: the authoritative board model.
//!
//! ## Move Sequence
//!
//! `roll_dice` runs the first phase of a move and leaves it pending:
//!
//! 1. Provisional move: add the face to the mover's cell. A sum past the
//!    winning cell is rejected and the pawn stays put.
//! 2. Resolution delay: `tick` accumulates frame time until the configured
//!    delay has elapsed (`resolve_pending` skips the wait).
//! 3. Capture: other pawns on the resolved cell are sent home.
//! 4. Commit: the mover takes the resolved cell.
//! 5. Win check: reaching the winning cell fires `GameFinish` and the turn
//!    stays with the winner.
//! 6. Turn advance: round-robin over the roster.
//!
//! Commands whose preconditions do not hold return a `GameError` and
//! leave the session unchanged.
//!
//! A pending move is never cancelled. `start_game`, `reset_game` and
//! `restart_game` complete it before sending the pawns home.

use std::time::Duration;

use im::Vector;
use smallvec::SmallVec;

use super::pending::{MoveRecord, PendingMove};
use super::snapshot::GameSnapshot;
use crate::core::{
    Cell, DiceRoll, GameConfig, GameError, GameRng, PawnColor, Player, PlayerId, MIN_PLAYERS,
};

/// Largest roster a `PlayerId` can address.
const MAX_ROSTER: usize = u8::MAX as usize;
use crate::events::{EventKind, EventNotifier, GameEvent, Subscription};

/// A game session.
///
/// Construct one per game and hand it to whatever owns the render loop.
/// The session is single-threaded; it holds no locks.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,

    /// Roster in turn order.
    players: Vector<Player>,

    /// Whose turn it is.
    current: PlayerId,

    /// Last roll, cleared on restart.
    dice_roll: Option<DiceRoll>,

    started: bool,

    /// Set when a pawn reaches the winning cell.
    winner: Option<PlayerId>,

    /// Move waiting for its resolution delay.
    pending: Option<PendingMove>,

    /// Resolved moves since the session was built or last restarted.
    history: Vector<MoveRecord>,

    rng: GameRng,

    notifier: EventNotifier,
}

impl GameSession {
    /// Create a session with the two default players, Red and Blue.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_players(
            config,
            [
                Player::new("Red", PawnColor::Red),
                Player::new("Blue", PawnColor::Blue),
            ],
        )
    }

    /// Create a session with an explicit roster.
    ///
    /// Panics if the roster is smaller than 2 or larger than the
    /// configured maximum, or if a pawn stands past the winning cell.
    #[must_use]
    pub fn with_players(config: GameConfig, players: impl IntoIterator<Item = Player>) -> Self {
        let players: Vector<Player> = players.into_iter().collect();

        assert!(
            (MIN_PLAYERS..=MAX_ROSTER).contains(&config.max_players),
            "Roster limit must be between 2 and 255, got {}",
            config.max_players
        );
        assert!(players.len() >= MIN_PLAYERS, "Must have at least 2 players");
        assert!(
            players.len() <= config.max_players,
            "Roster exceeds the configured maximum of {} players",
            config.max_players
        );
        assert!(
            players.iter().all(|p| p.position <= config.winning_cell()),
            "Player position past the winning cell"
        );

        let rng = GameRng::new(config.seed);

        Self {
            config,
            players,
            current: PlayerId::new(0),
            dice_roll: None,
            started: false,
            winner: None,
            pending: None,
            history: Vector::new(),
            rng,
            notifier: EventNotifier::new(),
        }
    }

    /// Restore a session from a snapshot (saved game, replay, test fixture).
    ///
    /// The dice continue from the snapshot's RNG state, not from
    /// `config.seed`. Move history starts empty. Panics under the same
    /// roster rules as `with_players`, if the snapshot names a player not on
    /// the roster, or if its pending move does not match the board.
    #[must_use]
    pub fn from_snapshot(config: GameConfig, snapshot: GameSnapshot) -> Self {
        let mut session = Self::with_players(config, snapshot.players);
        let count = session.players.len();
        let winning_cell = session.config.winning_cell();

        assert!(snapshot.current_player.index() < count, "Current player not on the roster");
        assert!(
            snapshot.winner.map_or(true, |w| w.index() < count),
            "Winner not on the roster"
        );
        if let Some(pending) = &snapshot.pending {
            assert!(pending.player.index() < count, "Pending mover not on the roster");
            assert!(
                pending.from <= winning_cell && pending.provisional <= winning_cell,
                "Pending move past the winning cell"
            );
            assert_eq!(
                session.players[pending.player.index()].position,
                pending.provisional,
                "Pending mover is not on the provisional cell"
            );
            assert!(
                !pending.overshoot || pending.provisional == pending.from,
                "Overshot move must not displace the pawn"
            );
        }

        session.rng = GameRng::from_state(&snapshot.rng);
        session.current = snapshot.current_player;
        session.dice_roll = snapshot.dice_roll;
        session.started = snapshot.started;
        session.winner = snapshot.winner;
        session.pending = snapshot.pending;
        session
    }

    // === Queries ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Roster in turn order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Look up a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Number of players on the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Last dice roll.
    #[must_use]
    pub fn dice_roll(&self) -> Option<DiceRoll> {
        self.dice_roll
    }

    /// Has the game been started?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// The winner, once a pawn has reached the winning cell.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Has a pawn reached the winning cell?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// The move waiting for resolution, if any.
    #[must_use]
    pub fn pending_move(&self) -> Option<&PendingMove> {
        self.pending.as_ref()
    }

    /// Resolved moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Is capturing enabled?
    #[must_use]
    pub fn capture_enabled(&self) -> bool {
        self.config.capture_enabled
    }

    /// Cheap read-only copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.clone(),
            dice_roll: self.dice_roll,
            current_player: self.current,
            started: self.started,
            winner: self.winner,
            pending: self.pending.clone(),
            rng: self.rng.state(),
        }
    }

    // === Roster and lifecycle ===

    /// Append a player at the start cell.
    ///
    /// Ignored with `GameError::RosterFull` once the roster is at its limit.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        color: PawnColor,
    ) -> Result<PlayerId, GameError> {
        let max = self.config.max_players;
        if self.players.len() >= max {
            tracing::debug!(max, "roster full, player not added");
            return Err(GameError::RosterFull { max });
        }

        let id = PlayerId::new(self.players.len() as u8);
        let player = Player::new(name, color);
        tracing::debug!(player = %player.name, color = %color, %id, "player added");
        self.players.push_back(player);

        Ok(id)
    }

    /// Start the game, sending every pawn to the start.
    ///
    /// Calling it again while started resets positions again. A pending
    /// move completes first.
    pub fn start_game(&mut self) {
        self.started = true;
        self.send_everyone_home();
        tracing::info!(players = self.players.len(), "game started");
    }

    /// Send every pawn to the start. `started` and the turn are kept.
    ///
    /// A pending move completes first, so its turn advance survives.
    pub fn reset_game(&mut self) {
        self.send_everyone_home();
        tracing::info!("game reset");
    }

    /// Back to a fresh, stopped game with the same roster.
    ///
    /// A pending move completes first; its record is then cleared with the
    /// rest of the history.
    pub fn restart_game(&mut self) {
        self.send_everyone_home();
        self.current = PlayerId::new(0);
        self.dice_roll = None;
        self.started = false;
        self.history.clear();
        tracing::info!("game restarted");
    }

    fn send_everyone_home(&mut self) {
        if let Ok(record) = self.resolve_pending() {
            tracing::debug!(
                player = %record.player,
                to = record.to,
                "pending move completed before reset"
            );
        }
        for player in self.players.iter_mut() {
            player.send_home();
        }
        self.winner = None;
    }

    /// Enable or disable captures for the rest of the session.
    pub fn set_capture_enabled(&mut self, enabled: bool) {
        self.config.capture_enabled = enabled;
    }

    // === Events ===

    /// Register a listener. Keep the token to remove it later.
    pub fn add_event_listener(
        &mut self,
        kind: EventKind,
        listener: impl Fn(&GameEvent) + 'static,
    ) -> Subscription {
        self.notifier.subscribe(kind, listener)
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove_event_listener(&mut self, subscription: Subscription) -> bool {
        self.notifier.unsubscribe(subscription)
    }

    /// The session's notifier.
    #[must_use]
    pub fn notifier(&self) -> &EventNotifier {
        &self.notifier
    }

    // === Move sequence ===

    /// Roll the die for the current player and start their move.
    pub fn roll_dice(&mut self) -> Result<DiceRoll, GameError> {
        self.check_can_roll()?;
        let roll = self.rng.roll_die();
        self.begin_move(roll);
        Ok(roll)
    }

    /// Start the current player's move with a roll produced elsewhere
    /// (a physics die, a replay, a test).
    pub fn roll_with(&mut self, roll: DiceRoll) -> Result<DiceRoll, GameError> {
        self.check_can_roll()?;
        self.begin_move(roll);
        Ok(roll)
    }

    fn check_can_roll(&self) -> Result<(), GameError> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.winner.is_some() {
            return Err(GameError::GameFinished);
        }
        if self.pending.is_some() {
            return Err(GameError::MovePending);
        }
        Ok(())
    }

    fn begin_move(&mut self, roll: DiceRoll) {
        let mover = self.current;
        let winning_cell = self.config.winning_cell();
        let from = self.players[mover.index()].position;

        let sum = u16::from(from) + u16::from(roll.face());
        let overshoot = sum > u16::from(winning_cell);
        let provisional = if overshoot { from } else { sum as Cell };

        self.dice_roll = Some(roll);
        self.players[mover.index()].position = provisional;

        tracing::debug!(
            player = %self.players[mover.index()].name,
            %roll,
            from,
            provisional,
            overshoot,
            "dice rolled"
        );

        self.pending = Some(PendingMove {
            player: mover,
            roll,
            from,
            provisional,
            overshoot,
            elapsed: Duration::ZERO,
        });
    }

    /// Advance the resolution clock by one frame.
    ///
    /// Resolves the pending move once the configured delay has elapsed.
    pub fn tick(&mut self, dt: Duration) -> Option<MoveRecord> {
        let delay = self.config.resolution_delay;
        let pending = self.pending.as_mut()?;

        pending.elapsed = pending.elapsed.saturating_add(dt);
        if !pending.is_due(delay) {
            return None;
        }

        self.resolve_pending().ok()
    }

    /// Resolve the pending move now, without waiting out the delay.
    pub fn resolve_pending(&mut self) -> Result<MoveRecord, GameError> {
        let pending = self.pending.take().ok_or(GameError::NoPendingMove)?;
        let mover = pending.player;
        let winning_cell = self.config.winning_cell();

        let to = if pending.overshoot {
            pending.from
        } else {
            self.config.board.resolve(pending.provisional)
        };

        let captured = if pending.overshoot || !self.config.capture_enabled {
            SmallVec::new()
        } else {
            self.capture_at(to, mover)
        };

        self.players[mover.index()].position = to;

        let won = !pending.overshoot && to == winning_cell;
        if won {
            self.winner = Some(mover);
            let player = self.players[mover.index()].clone();
            tracing::info!(player = %player.name, "game finished");
            self.notifier.emit(&GameEvent::GameFinish {
                player_id: mover,
                player,
            });
        } else {
            self.current = mover.next(self.players.len());
        }

        tracing::debug!(
            player = %self.players[mover.index()].name,
            provisional = pending.provisional,
            to,
            captured = captured.len(),
            next = %self.current,
            "move resolved"
        );

        let record = MoveRecord {
            player: mover,
            roll: pending.roll,
            from: pending.from,
            provisional: pending.provisional,
            to,
            overshoot: pending.overshoot,
            captured,
            won,
            next_player: self.current,
        };
        self.history.push_back(record.clone());

        Ok(record)
    }

    /// Send every other pawn on `cell` home, in roster order.
    fn capture_at(&mut self, cell: Cell, mover: PlayerId) -> SmallVec<[PlayerId; 3]> {
        let victims: SmallVec<[PlayerId; 3]> = self
            .players
            .iter()
            .enumerate()
            .filter(|&(index, player)| index != mover.index() && player.position == cell)
            .map(|(index, _)| PlayerId::new(index as u8))
            .collect();

        for &victim in &victims {
            let event = GameEvent::PlayerKilled {
                player_id: victim,
                player: self.players[victim.index()].clone(),
                by_id: mover,
                by: self.players[mover.index()].clone(),
                cell,
            };
            self.players[victim.index()].send_home();

            tracing::info!(
                player = %event.player().name,
                by = %self.players[mover.index()].name,
                cell,
                "player captured"
            );
            self.notifier.emit(&event);
        }

        victims
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
