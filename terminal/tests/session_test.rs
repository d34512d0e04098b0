use common::{Mark, Snapshot, StreamEvent};
use terminal::session::{GameSession, Overlay};

fn state_event(json: &str) -> StreamEvent {
    StreamEvent::decode("message", json).expect("valid state payload")
}

#[test]
fn diagonal_win_scenario() {
    let mut session = GameSession::new();
    session.apply(StreamEvent::StartGame);

    let event = state_event(
        r#"{"gamestate":["X","O","X","Empty","X","Empty","Empty","Empty","Empty"],"outcome":["X",6]}"#,
    );
    let changes = session.apply(event);

    let changed: Vec<usize> = changes.iter().map(|c| c.index).collect();
    assert_eq!(changed, vec![0, 1, 2, 4]);
    assert_eq!(session.overlay(), Overlay::Shown { line: 6 });
    assert!(session.notification().starts_with("Player X wins!"));
    assert_eq!(session.mirror().0[4], Mark::X);
}

#[test]
fn draw_scenario() {
    let mut session = GameSession::new();
    session.apply(StreamEvent::StartGame);

    let event = state_event(
        r#"{"gamestate":["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"],"outcome":["Empty",10]}"#,
    );
    session.apply(event);

    assert_eq!(session.overlay(), Overlay::Shown { line: 10 });
    assert!(session.notification().starts_with("It's a draw!"));
}

#[test]
fn applying_the_same_snapshot_twice_is_a_noop() {
    let mut session = GameSession::new();
    session.apply(StreamEvent::StartGame);

    let json = r#"{"gamestate":["X","Empty","Empty","Empty","O","Empty","Empty","Empty","Empty"],"outcome":null}"#;
    let first = session.apply(state_event(json));
    assert_eq!(first.len(), 2);

    // A reconnect may replay the latest known state verbatim.
    let second = session.apply(state_event(json));
    assert!(second.is_empty());
}

#[test]
fn startgame_resets_board_and_overlay() {
    let mut session = GameSession::new();
    session.apply(StreamEvent::StartGame);
    session.apply(state_event(
        r#"{"gamestate":["X","O","X","Empty","X","Empty","Empty","Empty","Empty"],"outcome":["X",6]}"#,
    ));
    assert!(matches!(session.overlay(), Overlay::Shown { .. }));

    session.apply(StreamEvent::StartGame);
    assert_eq!(*session.mirror(), Snapshot::empty());
    assert_eq!(session.overlay(), Overlay::Hidden);
    assert!(session.board_active());
    assert!(!session.invite_visible());
}

#[test]
fn overlay_persists_through_outcomeless_updates() {
    let mut session = GameSession::new();
    session.apply(StreamEvent::StartGame);
    session.apply(state_event(
        r#"{"gamestate":["X","O","X","Empty","X","Empty","Empty","Empty","Empty"],"outcome":["X",6]}"#,
    ));

    session.apply(state_event(
        r#"{"gamestate":["X","O","X","Empty","X","Empty","Empty","Empty","Empty"],"outcome":null}"#,
    ));
    assert_eq!(session.overlay(), Overlay::Shown { line: 6 });
}

#[test]
fn credentials_overwrite_prior_value() {
    let mut session = GameSession::new();
    session.apply(StreamEvent::Credentials("abc123".to_owned()));
    assert_eq!(session.credentials(), Some("abc123"));

    // A reconnect issues a fresh token.
    session.apply(StreamEvent::Credentials("def456".to_owned()));
    assert_eq!(session.credentials(), Some("def456"));
}

#[test]
fn notifications_replace_verbatim() {
    let mut session = GameSession::new();
    session.apply(StreamEvent::Notification("Your turn, Player X!".to_owned()));
    assert_eq!(session.notification(), "Your turn, Player X!");
    session.apply(StreamEvent::Notification("Wait for your opponent".to_owned()));
    assert_eq!(session.notification(), "Wait for your opponent");
}

#[test]
fn optimistic_rematch_clear_tolerates_a_following_startgame() {
    let mut session = GameSession::new();
    session.apply(StreamEvent::StartGame);
    session.apply(state_event(
        r#"{"gamestate":["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"],"outcome":["Empty",10]}"#,
    ));

    session.clear_overlay();
    assert_eq!(session.overlay(), Overlay::Hidden);

    // The server's startgame lands afterwards; both orders end the same way.
    session.apply(StreamEvent::StartGame);
    assert_eq!(session.overlay(), Overlay::Hidden);
    assert_eq!(*session.mirror(), Snapshot::empty());
}
