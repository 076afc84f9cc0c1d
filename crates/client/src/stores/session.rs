//! Cached replica of the server's room and game state.
//!
//! The server is authoritative; every mutation here is a response to a
//! `ServerEvent`. `SessionState` itself is a plain struct with pure
//! mutators so event handling is testable without a UI runtime.

use dioxus::prelude::*;
use mafia_shared::{ChatMessage, GameResult, GameState, Role, Room, ServerEvent};

use crate::time::{sleep_ms, spawn_task};

/// One recorded vote during the vote phase.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteEntry {
    pub voter_name: String,
    /// `None` means the voter abstained.
    pub target_name: Option<String>,
}

/// Everything the client knows about the current room and game.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub room: Option<Room>,
    pub game: Option<GameState>,
    pub role: Option<Role>,
    pub messages: Vec<ChatMessage>,
    pub votes: Vec<VoteEntry>,
    pub last_vote_message: Option<String>,
    pub last_result: Option<GameResult>,
    /// Bumped whenever a new phase timer starts; a running countdown task
    /// holds the epoch it was started with and stops once it goes stale.
    pub timer_epoch: u64,
}

impl SessionState {
    /// Apply a server event to the replica.
    pub fn apply(&mut self, event: &ServerEvent) {
        match event {
            ServerEvent::RoomJoined { room } => {
                self.room = Some(room.clone());
                self.messages.clear();
                self.votes.clear();
            }
            ServerEvent::RoomLeft => {
                self.room = None;
                self.game = None;
                self.role = None;
                self.messages.clear();
                self.votes.clear();
            }
            ServerEvent::PlayerJoined { player } => {
                if let Some(room) = self.room.as_mut() {
                    if !room.players.iter().any(|p| p.id == player.id) {
                        room.players.push(player.clone());
                    }
                    room.current_players = room.players.len() as u32;
                }
            }
            ServerEvent::PlayerLeft { player } => {
                if let Some(room) = self.room.as_mut() {
                    room.players.retain(|p| p.id != player.id);
                    room.current_players = room.players.len() as u32;
                }
            }
            ServerEvent::GameStarted { game_state } => {
                self.game = Some(game_state.clone());
                self.votes.clear();
                self.last_vote_message = None;
                self.last_result = None;
                self.timer_epoch += 1;
            }
            ServerEvent::GamePhaseChanged { phase } => {
                if let Some(game) = self.game.as_mut() {
                    game.phase = phase.clone();
                }
                self.votes.clear();
                self.last_vote_message = None;
                self.timer_epoch += 1;
            }
            ServerEvent::RoleAssigned { role } => {
                self.role = Some(*role);
            }
            ServerEvent::PlayerDied { player } => {
                self.mark_dead(player.id);
            }
            ServerEvent::GameEnded { result } => {
                self.last_result = Some(result.clone());
                self.game = None;
                self.role = None;
                self.votes.clear();
                self.timer_epoch += 1;
            }
            ServerEvent::NewMessage { message } => {
                // The server may redeliver on reconnect; dedupe by id.
                let duplicate = message
                    .id
                    .is_some_and(|id| self.messages.iter().any(|m| m.id == Some(id)));
                if !duplicate {
                    self.messages.push(message.clone());
                }
            }
            ServerEvent::MessageHidden { message_id, reason } => {
                if let Some(msg) = self
                    .messages
                    .iter_mut()
                    .find(|m| m.id == Some(*message_id))
                {
                    msg.hidden_reason = Some(reason.clone());
                }
            }
            ServerEvent::VoiceTranscribed {
                message_id,
                transcription,
            } => {
                if let Some(msg) = self
                    .messages
                    .iter_mut()
                    .find(|m| m.id == Some(*message_id))
                {
                    msg.transcription = Some(transcription.clone());
                }
            }
            ServerEvent::VoteCast {
                voter_name,
                target_name,
            } => {
                // A second vote from the same player replaces the first.
                self.votes.retain(|v| v.voter_name != *voter_name);
                self.votes.push(VoteEntry {
                    voter_name: voter_name.clone(),
                    target_name: target_name.clone(),
                });
            }
            ServerEvent::VoteResult {
                message,
                eliminated,
            } => {
                self.last_vote_message = Some(message.clone());
                if let Some(player) = eliminated {
                    self.mark_dead(player.id);
                }
                self.votes.clear();
            }
            // Toast-only events leave the replica untouched.
            ServerEvent::Notification { .. } | ServerEvent::Error { .. } => {}
        }
    }

    fn mark_dead(&mut self, player_id: i64) {
        if let Some(game) = self.game.as_mut() {
            if let Some(p) = game.players.iter_mut().find(|p| p.id == player_id) {
                p.is_alive = false;
            }
        }
        if let Some(room) = self.room.as_mut() {
            if let Some(p) = room.players.iter_mut().find(|p| p.id == player_id) {
                p.is_alive = false;
            }
        }
    }

    /// Advance the phase countdown by one second.
    ///
    /// Returns `false` when the caller's epoch is stale or the timer has
    /// run out, which tells the ticking task to stop.
    pub fn tick_phase(&mut self, epoch: u64) -> bool {
        if epoch != self.timer_epoch {
            return false;
        }
        match self.game.as_mut() {
            Some(game) if game.phase.time_left > 0 => {
                game.phase.time_left -= 1;
                game.phase.time_left > 0
            }
            _ => false,
        }
    }

    /// Seconds remaining in the current phase, if a game is running.
    pub fn time_left(&self) -> Option<u32> {
        self.game.as_ref().map(|g| g.phase.time_left)
    }
}

/// Global replica instance.
pub static SESSION: GlobalSignal<SessionState> = Signal::global(SessionState::default);

/// Apply a server event to the global replica and manage the countdown.
pub fn apply_server_event(event: &ServerEvent) {
    let starts_timer = matches!(
        event,
        ServerEvent::GameStarted { .. } | ServerEvent::GamePhaseChanged { .. }
    );

    let epoch = {
        let mut state = SESSION.write();
        state.apply(event);
        state.timer_epoch
    };

    if starts_timer {
        start_countdown(epoch);
    }
}

/// Run a one-second countdown loop for the given timer epoch.
///
/// The loop exits on its own as soon as a newer phase bumps the epoch,
/// so stale timers never bleed into the next phase.
fn start_countdown(epoch: u64) {
    spawn_task(async move {
        loop {
            sleep_ms(1000).await;
            if !SESSION.write().tick_phase(epoch) {
                break;
            }
        }
    });
}

/// Drop all cached state.
pub fn reset() {
    *SESSION.write() = SessionState::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use mafia_shared::{GamePhase, PhaseState, Player, Severity, Winner};

    fn player(id: i64, name: &str) -> Player {
        Player {
            id,
            user_id: id,
            display_name: name.to_string(),
            avatar_url: None,
            is_alive: true,
            is_ready: false,
            is_online: true,
        }
    }

    fn room_with(players: Vec<Player>) -> Room {
        Room {
            id: 1,
            room_code: "ABCD".to_string(),
            name: "Test Room".to_string(),
            max_players: 10,
            min_players: 4,
            current_players: players.len() as u32,
            allow_voice_chat: false,
            players,
        }
    }

    fn running_game(players: Vec<Player>, time_left: u32) -> GameState {
        GameState {
            phase: PhaseState {
                phase: GamePhase::Night,
                time_left,
            },
            players,
            round: 1,
        }
    }

    fn message(id: i64, sender: &str, content: &str) -> ChatMessage {
        ChatMessage {
            id: Some(id),
            user_id: Some(1),
            sender_name: sender.to_string(),
            content: content.to_string(),
            message_type: Default::default(),
            sent_at: chrono::Utc::now(),
            is_flagged: false,
            suspicion_score: 0.0,
            hidden_reason: None,
            transcription: None,
        }
    }

    #[test]
    fn room_joined_caches_room_and_clears_stale_chat() {
        let mut state = SessionState::default();
        state.messages.push(message(9, "old", "stale"));

        state.apply(&ServerEvent::RoomJoined {
            room: room_with(vec![player(1, "alice")]),
        });

        assert_eq!(state.room.as_ref().unwrap().room_code, "ABCD");
        assert!(state.messages.is_empty());
    }

    #[test]
    fn room_left_clears_room_game_and_chat() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::RoomJoined {
            room: room_with(vec![]),
        });
        state.apply(&ServerEvent::GameStarted {
            game_state: running_game(vec![], 60),
        });
        state.apply(&ServerEvent::NewMessage {
            message: message(1, "alice", "hi"),
        });

        state.apply(&ServerEvent::RoomLeft);

        assert!(state.room.is_none());
        assert!(state.game.is_none());
        assert!(state.messages.is_empty());
    }

    #[test]
    fn player_join_and_leave_update_roster() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::RoomJoined {
            room: room_with(vec![player(1, "alice")]),
        });

        state.apply(&ServerEvent::PlayerJoined {
            player: player(2, "bob"),
        });
        // A redelivered join for the same player is a no-op.
        state.apply(&ServerEvent::PlayerJoined {
            player: player(2, "bob"),
        });
        assert_eq!(state.room.as_ref().unwrap().players.len(), 2);
        assert_eq!(state.room.as_ref().unwrap().current_players, 2);

        state.apply(&ServerEvent::PlayerLeft {
            player: player(1, "alice"),
        });
        let room = state.room.as_ref().unwrap();
        assert_eq!(room.players.len(), 1);
        assert_eq!(room.players[0].display_name, "bob");
    }

    #[test]
    fn message_hidden_records_reason_on_the_right_message() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::NewMessage {
            message: message(1, "alice", "hello"),
        });
        state.apply(&ServerEvent::NewMessage {
            message: message(2, "bob", "buy cheap gold"),
        });

        state.apply(&ServerEvent::MessageHidden {
            message_id: 2,
            reason: "spam".to_string(),
        });

        assert!(state.messages[0].hidden_reason.is_none());
        assert_eq!(state.messages[1].hidden_reason.as_deref(), Some("spam"));
        // Original content is kept; only rendering changes.
        assert_eq!(state.messages[1].content, "buy cheap gold");
    }

    #[test]
    fn duplicate_message_ids_are_not_appended_twice() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::NewMessage {
            message: message(1, "alice", "hello"),
        });
        state.apply(&ServerEvent::NewMessage {
            message: message(1, "alice", "hello"),
        });
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn transcription_attaches_to_voice_message() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::NewMessage {
            message: message(5, "carol", "[voice]"),
        });
        state.apply(&ServerEvent::VoiceTranscribed {
            message_id: 5,
            transcription: "i think it's omar".to_string(),
        });
        assert_eq!(
            state.messages[0].transcription.as_deref(),
            Some("i think it's omar")
        );
    }

    #[test]
    fn second_vote_from_same_player_replaces_first() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::VoteCast {
            voter_name: "alice".to_string(),
            target_name: Some("bob".to_string()),
        });
        state.apply(&ServerEvent::VoteCast {
            voter_name: "alice".to_string(),
            target_name: Some("carol".to_string()),
        });

        assert_eq!(state.votes.len(), 1);
        assert_eq!(state.votes[0].target_name.as_deref(), Some("carol"));
    }

    #[test]
    fn vote_result_applies_elimination_and_clears_tally() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::RoomJoined {
            room: room_with(vec![player(1, "alice"), player(2, "bob")]),
        });
        state.apply(&ServerEvent::GameStarted {
            game_state: running_game(vec![player(1, "alice"), player(2, "bob")], 60),
        });
        state.apply(&ServerEvent::VoteCast {
            voter_name: "alice".to_string(),
            target_name: Some("bob".to_string()),
        });

        state.apply(&ServerEvent::VoteResult {
            message: "bob was voted out".to_string(),
            eliminated: Some(player(2, "bob")),
        });

        assert!(state.votes.is_empty());
        assert_eq!(state.last_vote_message.as_deref(), Some("bob was voted out"));
        let game = state.game.as_ref().unwrap();
        assert!(!game.players.iter().find(|p| p.id == 2).unwrap().is_alive);
        let room = state.room.as_ref().unwrap();
        assert!(!room.players.iter().find(|p| p.id == 2).unwrap().is_alive);
    }

    #[test]
    fn player_died_marks_dead_in_game_and_roster() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::RoomJoined {
            room: room_with(vec![player(1, "alice")]),
        });
        state.apply(&ServerEvent::GameStarted {
            game_state: running_game(vec![player(1, "alice")], 60),
        });

        state.apply(&ServerEvent::PlayerDied {
            player: player(1, "alice"),
        });

        assert!(!state.game.as_ref().unwrap().players[0].is_alive);
        assert!(!state.room.as_ref().unwrap().players[0].is_alive);
    }

    #[test]
    fn phase_change_bumps_epoch_and_stale_tick_is_rejected() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::GameStarted {
            game_state: running_game(vec![], 30),
        });
        let old_epoch = state.timer_epoch;

        assert!(state.tick_phase(old_epoch));
        assert_eq!(state.time_left(), Some(29));

        state.apply(&ServerEvent::GamePhaseChanged {
            phase: PhaseState {
                phase: GamePhase::Day,
                time_left: 120,
            },
        });

        // The old countdown's epoch is stale: it must stop without
        // touching the fresh timer.
        assert!(!state.tick_phase(old_epoch));
        assert_eq!(state.time_left(), Some(120));

        assert!(state.tick_phase(state.timer_epoch));
        assert_eq!(state.time_left(), Some(119));
    }

    #[test]
    fn tick_stops_at_zero() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::GameStarted {
            game_state: running_game(vec![], 1),
        });
        let epoch = state.timer_epoch;

        assert!(!state.tick_phase(epoch));
        assert_eq!(state.time_left(), Some(0));
        assert!(!state.tick_phase(epoch));
        assert_eq!(state.time_left(), Some(0));
    }

    #[test]
    fn game_ended_stores_result_and_drops_role() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::GameStarted {
            game_state: running_game(vec![], 60),
        });
        state.apply(&ServerEvent::RoleAssigned {
            role: Role::Detective,
        });

        state.apply(&ServerEvent::GameEnded {
            result: GameResult {
                winner: Winner::Civilians,
                duration: 12,
                rounds: 3,
                survivors: vec!["alice".to_string()],
                players: vec![],
            },
        });

        assert!(state.game.is_none());
        assert!(state.role.is_none());
        assert_eq!(state.last_result.as_ref().unwrap().winner, Winner::Civilians);
    }

    #[test]
    fn notification_events_do_not_touch_the_replica() {
        let mut state = SessionState::default();
        state.apply(&ServerEvent::Notification {
            message: "server restarting soon".to_string(),
            kind: Severity::Warning,
        });
        state.apply(&ServerEvent::Error {
            message: "not your turn".to_string(),
        });
        assert_eq!(format!("{:?}", state), format!("{:?}", SessionState::default()));
    }
}
