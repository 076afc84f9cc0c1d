use mafia_shared::*;
use serde_json::{self as json, Value};

fn parse(json_str: &str) -> Value {
    json::from_str(json_str).expect("valid json")
}

#[test]
fn phase_changed_event_deserializes_from_server_json() {
    // Representative frame as the server pushes it.
    let frame = r#"{"event":"game_phase_changed","data":{"phase":{"phase":"vote","time_left":30}}}"#;
    let event: ServerEvent = json::from_str(frame).expect("deserialize");
    match event {
        ServerEvent::GamePhaseChanged { phase } => {
            assert_eq!(phase.phase, GamePhase::Vote);
            assert_eq!(phase.time_left, 30);
        }
        other => panic!("expected GamePhaseChanged, got {:?}", other),
    }
}

#[test]
fn room_joined_event_carries_room_and_players() {
    let frame = r#"{
        "event": "room_joined",
        "data": {
            "room": {
                "id": 7,
                "room_code": "ABCD",
                "name": "late night",
                "max_players": 12,
                "min_players": 4,
                "current_players": 2,
                "allow_voice_chat": true,
                "players": [
                    {"id": 1, "user_id": 10, "display_name": "amira", "is_alive": true, "is_ready": false, "is_online": true}
                ]
            }
        }
    }"#;
    let event: ServerEvent = json::from_str(frame).expect("deserialize");
    match event {
        ServerEvent::RoomJoined { room } => {
            assert_eq!(room.room_code, "ABCD");
            assert_eq!(room.players.len(), 1);
            assert_eq!(room.players[0].display_name, "amira");
        }
        other => panic!("expected RoomJoined, got {:?}", other),
    }
}

#[test]
fn room_left_event_deserializes_without_a_data_member() {
    let event: ServerEvent = json::from_str(r#"{"event":"room_left"}"#).expect("deserialize");
    assert_eq!(event, ServerEvent::RoomLeft);

    // Some frames carry an explicit null payload.
    let event: ServerEvent =
        json::from_str(r#"{"event":"room_left","data":null}"#).expect("deserialize");
    assert_eq!(event, ServerEvent::RoomLeft);
}

#[test]
fn player_join_and_leave_events_carry_the_player() {
    let joined: ServerEvent = json::from_str(
        r#"{"event":"player_joined","data":{"player":{"id":3,"user_id":30,"display_name":"ziad","is_alive":true,"is_ready":false,"is_online":true}}}"#,
    )
    .expect("deserialize");
    match joined {
        ServerEvent::PlayerJoined { player } => {
            assert_eq!(player.user_id, 30);
            assert_eq!(player.display_name, "ziad");
        }
        other => panic!("expected PlayerJoined, got {:?}", other),
    }

    let left: ServerEvent = json::from_str(
        r#"{"event":"player_left","data":{"player":{"id":3,"user_id":30,"display_name":"ziad","is_alive":true,"is_ready":false,"is_online":false}}}"#,
    )
    .expect("deserialize");
    match left {
        ServerEvent::PlayerLeft { player } => assert!(!player.is_online),
        other => panic!("expected PlayerLeft, got {:?}", other),
    }
}

#[test]
fn game_started_event_deserializes_initial_state() {
    let frame = r#"{
        "event": "game_started",
        "data": {
            "game_state": {
                "phase": {"phase": "night", "time_left": 60},
                "round": 1,
                "players": [
                    {"id": 1, "user_id": 10, "display_name": "amira", "is_alive": true, "is_ready": true, "is_online": true}
                ]
            }
        }
    }"#;
    let event: ServerEvent = json::from_str(frame).expect("deserialize");
    match event {
        ServerEvent::GameStarted { game_state } => {
            assert_eq!(game_state.phase.phase, GamePhase::Night);
            assert_eq!(game_state.round, 1);
            assert_eq!(game_state.players.len(), 1);
        }
        other => panic!("expected GameStarted, got {:?}", other),
    }
}

#[test]
fn role_assigned_and_player_died_events_deserialize() {
    let role: ServerEvent =
        json::from_str(r#"{"event":"role_assigned","data":{"role":"detective"}}"#)
            .expect("deserialize");
    assert_eq!(
        role,
        ServerEvent::RoleAssigned {
            role: Role::Detective
        }
    );

    let died: ServerEvent = json::from_str(
        r#"{"event":"player_died","data":{"player":{"id":2,"user_id":20,"display_name":"omar","is_alive":false,"is_ready":true,"is_online":true}}}"#,
    )
    .expect("deserialize");
    match died {
        ServerEvent::PlayerDied { player } => assert!(!player.is_alive),
        other => panic!("expected PlayerDied, got {:?}", other),
    }
}

#[test]
fn voice_transcribed_event_targets_a_message_by_id() {
    let event: ServerEvent = json::from_str(
        r#"{"event":"voice_transcribed","data":{"message_id":9,"transcription":"I saw him leave"}}"#,
    )
    .expect("deserialize");
    assert_eq!(
        event,
        ServerEvent::VoiceTranscribed {
            message_id: 9,
            transcription: "I saw him leave".to_string()
        }
    );
}

#[test]
fn vote_result_deserializes_with_and_without_elimination() {
    let event: ServerEvent = json::from_str(
        r#"{"event":"vote_result","data":{"message":"omar was voted out","eliminated":"omar"}}"#,
    )
    .expect("deserialize");
    assert_eq!(
        event,
        ServerEvent::VoteResult {
            message: "omar was voted out".to_string(),
            eliminated: Some("omar".to_string())
        }
    );

    // A tied vote eliminates nobody.
    let event: ServerEvent = json::from_str(
        r#"{"event":"vote_result","data":{"message":"the vote was tied","eliminated":null}}"#,
    )
    .expect("deserialize");
    assert_eq!(
        event,
        ServerEvent::VoteResult {
            message: "the vote was tied".to_string(),
            eliminated: None
        }
    );
}

#[test]
fn error_event_carries_the_server_message() {
    let event: ServerEvent =
        json::from_str(r#"{"event":"error","data":{"message":"room is full"}}"#)
            .expect("deserialize");
    assert_eq!(
        event,
        ServerEvent::Error {
            message: "room is full".to_string()
        }
    );
}

#[test]
fn chat_message_defaults_apply_for_sparse_payloads() {
    // System lines omit id, user_id, moderation fields.
    let frame = r#"{
        "event": "new_message",
        "data": {
            "message": {
                "sender_name": "System",
                "content": "amira joined the room",
                "message_type": "system",
                "sent_at": "2026-08-25T12:00:00Z"
            }
        }
    }"#;
    let event: ServerEvent = json::from_str(frame).expect("deserialize");
    match event {
        ServerEvent::NewMessage { message } => {
            assert_eq!(message.id, None);
            assert_eq!(message.user_id, None);
            assert_eq!(message.message_type, MessageKind::System);
            assert_eq!(message.suspicion_score, 0.0);
            assert!(!message.is_flagged);
            assert!(message.hidden_reason.is_none());
        }
        other => panic!("expected NewMessage, got {:?}", other),
    }
}

#[test]
fn message_hidden_and_vote_events_deserialize() {
    let hidden: ServerEvent =
        json::from_str(r#"{"event":"message_hidden","data":{"message_id":42,"reason":"spam"}}"#)
            .expect("deserialize");
    assert_eq!(
        hidden,
        ServerEvent::MessageHidden {
            message_id: 42,
            reason: "spam".to_string()
        }
    );

    // Abstention arrives as a null target.
    let vote: ServerEvent =
        json::from_str(r#"{"event":"vote_cast","data":{"voter_name":"omar","target_name":null}}"#)
            .expect("deserialize");
    assert_eq!(
        vote,
        ServerEvent::VoteCast {
            voter_name: "omar".to_string(),
            target_name: None
        }
    );
}

#[test]
fn game_ended_event_deserializes_full_result() {
    let frame = r#"{
        "event": "game_ended",
        "data": {
            "result": {
                "winner": "civilians",
                "duration": 18,
                "rounds": 5,
                "survivors": ["amira", "omar"],
                "players": [
                    {"display_name": "amira", "role": "doctor", "is_winner": true},
                    {"display_name": "ziad", "role": "mafia", "is_winner": false}
                ]
            }
        }
    }"#;
    let event: ServerEvent = json::from_str(frame).expect("deserialize");
    match event {
        ServerEvent::GameEnded { result } => {
            assert_eq!(result.winner, Winner::Civilians);
            assert_eq!(result.rounds, 5);
            assert_eq!(result.players[1].role, Role::Mafia);
            assert!(!result.players[1].is_winner);
        }
        other => panic!("expected GameEnded, got {:?}", other),
    }
}

#[test]
fn notification_event_maps_type_field_to_severity() {
    let frame = r#"{"event":"notification","data":{"message":"Game starts soon","type":"warning"}}"#;
    let event: ServerEvent = json::from_str(frame).expect("deserialize");
    assert_eq!(
        event,
        ServerEvent::Notification {
            message: "Game starts soon".to_string(),
            kind: Severity::Warning
        }
    );
}

#[test]
fn authenticate_command_serializes_with_event_tag() {
    let cmd = ClientCommand::Authenticate { user_id: 7 };
    let v = parse(&json::to_string(&cmd).expect("serialize"));
    assert_eq!(v["event"], "authenticate");
    assert_eq!(v["data"]["user_id"], 7);
}

#[test]
fn send_message_command_roundtrip() {
    let cmd = ClientCommand::SendMessage {
        content: "who is acting strange?".to_string(),
        message_type: MessageKind::Text,
    };
    let s = json::to_string(&cmd).expect("serialize");
    let v = parse(&s);
    assert_eq!(v["event"], "send_message");
    assert_eq!(v["data"]["content"], "who is acting strange?");
    assert_eq!(v["data"]["message_type"], "text");

    let back: ClientCommand = json::from_str(&s).expect("deserialize");
    assert_eq!(back, cmd);
}

#[test]
fn toggle_ready_command_serializes_without_data() {
    let v = parse(&json::to_string(&ClientCommand::ToggleReady).expect("serialize"));
    assert_eq!(v["event"], "toggle_ready");
}

#[test]
fn role_and_phase_identifiers_match_the_wire_names() {
    assert_eq!(json::to_string(&Role::Citizen).unwrap(), "\"citizen\"");
    assert_eq!(json::to_string(&Role::Vigilante).unwrap(), "\"vigilante\"");
    assert_eq!(json::to_string(&GamePhase::Night).unwrap(), "\"night\"");
    assert_eq!(json::to_string(&GamePhase::Vote).unwrap(), "\"vote\"");

    let role: Role = json::from_str("\"jester\"").unwrap();
    assert_eq!(role.display_name(), "Jester");
}

#[test]
fn create_room_response_exposes_room_code() {
    let body = r#"{"success":true,"message":"Room created","room":{"room_code":"QXZW"}}"#;
    let resp: CreateRoomResponse = json::from_str(body).expect("deserialize");
    assert!(resp.success);
    assert_eq!(resp.room.map(|r| r.room_code).as_deref(), Some("QXZW"));
}
