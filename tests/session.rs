use cozy_chess::{Color, Square};
use pawnstorm::{MoveError, Position, SearchParams, Session, SessionError, SessionManager};
use pretty_assertions::assert_eq;

const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
const SCHOLARS_MATE: &str = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4";
const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

#[test]
fn user_moves_are_validated() {
    let mut s = Session::new();
    let start = s.get_board_fen();
    assert_eq!(s.apply_user_move("e2e5"), Err(MoveError::Illegal("e2e5".to_string())));
    assert!(matches!(s.apply_user_move("zz"), Err(MoveError::Malformed(_))));
    assert_eq!(s.get_board_fen(), start);
    assert_eq!(s.last_move(), None);

    s.apply_user_move("e2e4").unwrap();
    assert_eq!(s.history(), &["e2e4".to_string()]);
    assert_eq!(s.last_move(), Some("e2e4"));
    assert_eq!(s.get_result(), "*");
}

#[test]
fn results_by_outcome() {
    assert_eq!(Session::from_fen(FOOLS_MATE).unwrap().get_result(), "0-1");
    assert_eq!(Session::from_fen(SCHOLARS_MATE).unwrap().get_result(), "1-0");
    assert_eq!(Session::from_fen(STALEMATE).unwrap().get_result(), "1/2-1/2");
    assert!(Session::from_fen(STALEMATE).unwrap().is_game_over());
}

#[test]
fn manager_requires_started_game() {
    let mut m = SessionManager::default();
    assert_eq!(m.make_user_move("e2e4"), Err(SessionError::NotStarted));
    assert_eq!(m.get_board_state(), Err(SessionError::NotStarted));
    assert_eq!(m.resign(), Err(SessionError::NotStarted));
    assert_eq!(m.get_last_move(), None);
}

#[test]
fn invalid_move_leaves_game_unchanged() {
    let mut m = SessionManager::default();
    m.start_new_game();
    let before = m.get_board_state().unwrap();
    let err = m.make_user_move("e2e5").unwrap_err();
    assert!(matches!(err, SessionError::InvalidMove(MoveError::Illegal(_))));
    assert_eq!(m.get_board_state().unwrap(), before);
}

#[test]
fn engine_replies_to_opening_move() {
    let mut m = SessionManager::new(SearchParams { depth: 2, ..SearchParams::default() });
    m.start_new_game();
    let out = m.make_user_move("e2e4").unwrap();
    let ai = out.ai_move.clone().expect("engine should reply");
    assert_eq!(m.get_last_move(), Some(ai));
    assert!(!out.is_game_over);
    assert_eq!(out.result, "*");

    let start = Position::startpos();
    let after = Position::from_fen(&out.fen).unwrap();
    assert_eq!(after.side_to_move(), Color::White);
    let white_diff = start.board().colors(Color::White) ^ after.board().colors(Color::White);
    assert_eq!(white_diff, Square::E2.bitboard() | Square::E4.bitboard());
    let black_diff = start.board().colors(Color::Black) ^ after.board().colors(Color::Black);
    assert_eq!(black_diff.len(), 2, "exactly one black piece should have moved");
}

#[test]
fn mating_move_skips_engine() {
    let mut m = SessionManager::default();
    m.start_from_fen("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2").unwrap();
    let out = m.make_user_move("d8h4").unwrap();
    assert_eq!(out.ai_move, None);
    assert!(out.is_game_over);
    assert_eq!(out.result, "0-1");
    assert_eq!(m.get_last_move(), Some("d8h4".to_string()));
}

#[test]
fn resignation_ends_session() {
    let mut m = SessionManager::default();
    m.start_new_game();
    assert_eq!(m.resign(), Ok("0-1".to_string()));
    assert!(!m.is_started());
}

#[test]
fn outcome_serializes_to_json() {
    let mut m = SessionManager::default();
    m.start_new_game();
    let out = m.make_user_move("d2d4").unwrap();
    let v: serde_json::Value = serde_json::to_value(&out).unwrap();
    assert_eq!(v["result"], "*");
    assert_eq!(v["is_game_over"], false);
    assert_eq!(v["fen"], out.fen.as_str());
}
