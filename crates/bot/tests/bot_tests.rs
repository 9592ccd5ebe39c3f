use draughts_bot::{bot_move, Bot, BotConfig, Difficulty, Hop};
use draughts_core::{
    any_capture, apply_move, game_status, is_capture, Board, Color, GameStatus, Piece, PieceKind,
    Square,
};
use rayon::prelude::*;

const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

fn s(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

fn seeded(seed: u64) -> Bot {
    Bot::new(BotConfig {
        seed: Some(seed),
        ..BotConfig::default()
    })
}

/// Every hop must be accepted by the validator and reproduce the board the
/// bot reported. A turn only runs past its first hop when that hop was a
/// capture, and each later hop is a capture from the last landing.
fn assert_hops_legal(start: &Board, color: Color, hops: &[Hop]) {
    let mut board = *start;
    if !any_capture(start, color) {
        assert!(hops.len() <= 1, "quiet turn with {} hops:\n{start}", hops.len());
    }
    for (i, hop) in hops.iter().enumerate() {
        if i > 0 {
            assert_eq!(hop.from, hops[i - 1].to, "chain broke at hop {i}");
            assert!(is_capture(&board, hop.as_move(), color), "hop {i} is not a capture");
        }
        board = apply_move(&board, hop.from, hop.to, color).unwrap();
        assert_eq!(board, hop.board);
    }
}

/// White man on (5,0) must jump (4,1) and then (2,3).
fn double_jump_board() -> Board {
    Board::empty()
        .with_piece(s(5, 0), Piece::man(Color::White))
        .with_piece(s(4, 1), Piece::man(Color::Black))
        .with_piece(s(2, 3), Piece::man(Color::Black))
        .with_piece(s(0, 7), Piece::man(Color::Black))
}

#[test]
fn opening_move_for_every_difficulty() {
    let board = Board::initial();
    for difficulty in ALL {
        let hops = seeded(3).play(&board, Color::Black, difficulty);
        assert_eq!(hops.len(), 1, "{difficulty}");
        assert_eq!(hops[0].as_move().span(), 1);
        assert_hops_legal(&board, Color::Black, &hops);
    }
}

#[test]
fn no_legal_moves_returns_empty() {
    let boxed = Board::empty()
        .with_piece(s(4, 4), Piece::king(Color::White))
        .with_piece(s(3, 3), Piece::king(Color::Black))
        .with_piece(s(3, 5), Piece::king(Color::Black))
        .with_piece(s(5, 3), Piece::king(Color::Black))
        .with_piece(s(5, 5), Piece::king(Color::Black))
        .with_piece(s(2, 2), Piece::man(Color::Black))
        .with_piece(s(2, 6), Piece::man(Color::Black))
        .with_piece(s(6, 2), Piece::man(Color::Black))
        .with_piece(s(6, 6), Piece::man(Color::Black));

    for difficulty in ALL {
        assert!(bot_move(&boxed, Color::White, difficulty, None).is_empty());
        assert!(bot_move(&Board::empty(), Color::Black, difficulty, None).is_empty());
    }
}

#[test]
fn capture_chain_is_played_to_the_end() {
    let board = double_jump_board();
    for difficulty in ALL {
        let hops = seeded(11).play(&board, Color::White, difficulty);
        let path: Vec<(Square, Square)> = hops.iter().map(|h| (h.from, h.to)).collect();
        assert_eq!(path, vec![(s(5, 0), s(3, 2)), (s(3, 2), s(1, 4))], "{difficulty}");
        assert_hops_legal(&board, Color::White, &hops);

        let last = hops.last().unwrap().board;
        assert_eq!(last.pieces_of(Color::Black).count(), 1);
    }
}

#[test]
fn promotion_mid_chain_continues_as_king() {
    let board = Board::empty()
        .with_piece(s(2, 1), Piece::man(Color::White))
        .with_piece(s(1, 2), Piece::man(Color::Black))
        .with_piece(s(2, 5), Piece::man(Color::Black));

    for difficulty in ALL {
        let hops = seeded(5).play(&board, Color::White, difficulty);
        assert_eq!(hops.len(), 2, "{difficulty}");
        assert_eq!(hops[0].to, s(0, 3));
        assert_eq!(
            hops[0].board.piece_at(s(0, 3)).map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert!([s(3, 6), s(4, 7)].contains(&hops[1].to));
        assert_eq!(game_status(&hops[1].board), GameStatus::WhiteWin);
        assert_hops_legal(&board, Color::White, &hops);
    }
}

#[test]
fn continuation_only_uses_the_landed_piece() {
    // After the first jump the white man on (5,6) could also capture,
    // but the chain must continue with the piece that just moved
    let board = double_jump_board()
        .with_piece(s(5, 6), Piece::man(Color::White))
        .with_piece(s(4, 5), Piece::man(Color::Black));

    for difficulty in ALL {
        let hops = seeded(9).play(&board, Color::White, difficulty);
        assert_hops_legal(&board, Color::White, &hops);
        if hops[0].from == s(5, 0) {
            assert_eq!(hops.len(), 2);
            assert_eq!(hops[1].from, s(3, 2));
        } else {
            assert_eq!(hops[0].from, s(5, 6));
        }
    }
}

#[test]
fn quiet_king_slide_ends_the_turn() {
    // The king can slide several squares but has nothing to capture, so a
    // long slide next to (3,2) must not be followed by a jump
    let board = Board::empty()
        .with_piece(s(7, 0), Piece::king(Color::White))
        .with_piece(s(3, 2), Piece::man(Color::Black))
        .with_piece(s(0, 7), Piece::man(Color::Black));
    assert!(!any_capture(&board, Color::White));

    for seed in 0..200 {
        let hops = seeded(seed).play(&board, Color::White, Difficulty::Easy);
        assert_eq!(hops.len(), 1, "seed {seed}: {hops:?}");
        assert_eq!(hops[0].board.pieces_of(Color::Black).count(), 2);
    }
    for difficulty in ALL {
        let hops = seeded(7).play(&board, Color::White, difficulty);
        assert_eq!(hops.len(), 1, "{difficulty}");
        assert_hops_legal(&board, Color::White, &hops);
    }
}

/// White must jump (5,2) and then choose between (2,1) and (2,5). Both win a
/// second man, but on (2,1) the black man on (1,0) jumps back.
fn chain_choice_board() -> Board {
    Board::empty()
        .with_piece(s(6, 1), Piece::man(Color::White))
        .with_piece(s(5, 2), Piece::man(Color::Black))
        .with_piece(s(3, 2), Piece::man(Color::Black))
        .with_piece(s(3, 4), Piece::man(Color::Black))
        .with_piece(s(1, 0), Piece::man(Color::Black))
}

#[test]
fn hard_continuations_search_to_chain_depth() {
    let board = chain_choice_board();
    let play = |chain_depth| {
        Bot::new(BotConfig {
            search_depth: 4,
            chain_depth,
            seed: None,
        })
        .play(&board, Color::White, Difficulty::Hard)
    };

    // One ply sees equal material and keeps the first landing
    let shallow = play(1);
    assert_eq!(shallow.len(), 2);
    assert_eq!((shallow[0].from, shallow[0].to), (s(6, 1), s(4, 3)));
    assert_eq!(shallow[1].to, s(2, 1));
    assert_hops_legal(&board, Color::White, &shallow);

    // Three plies see the recapture and take the safe landing
    let deep = play(3);
    assert_eq!(deep.len(), 2);
    assert_eq!(deep[1].to, s(2, 5));
    assert_hops_legal(&board, Color::White, &deep);
}

#[test]
fn medium_takes_the_bigger_prize() {
    let board = Board::empty()
        .with_piece(s(5, 2), Piece::man(Color::White))
        .with_piece(s(4, 1), Piece::man(Color::Black))
        .with_piece(s(5, 6), Piece::man(Color::White))
        .with_piece(s(4, 5), Piece::king(Color::Black));

    let hops = bot_move(&board, Color::White, Difficulty::Medium, None);
    assert_eq!(hops.len(), 1);
    assert_eq!(hops[0].as_move().from, s(5, 6));
    assert_eq!(hops[0].board.count(Color::Black, PieceKind::King), 0);
}

#[test]
fn hard_avoids_hanging_a_piece() {
    let board = Board::empty()
        .with_piece(s(5, 2), Piece::man(Color::White))
        .with_piece(s(5, 4), Piece::man(Color::White))
        .with_piece(s(3, 2), Piece::man(Color::Black));

    let medium = bot_move(&board, Color::White, Difficulty::Medium, None);
    assert_eq!((medium[0].from, medium[0].to), (s(5, 2), s(4, 1)));

    let hard = bot_move(&board, Color::White, Difficulty::Hard, Some(2));
    assert_eq!((hard[0].from, hard[0].to), (s(5, 2), s(4, 3)));
}

#[test]
fn hard_is_deterministic() {
    let board = Board::initial();
    let first = bot_move(&board, Color::Black, Difficulty::Hard, None);
    let second = bot_move(&board, Color::Black, Difficulty::Hard, None);
    assert_eq!(first, second);
}

#[test]
fn seeded_easy_is_reproducible() {
    let board = Board::initial();
    let a = seeded(42).play(&board, Color::White, Difficulty::Easy);
    let b = seeded(42).play(&board, Color::White, Difficulty::Easy);
    assert_eq!(a, b);
}

#[test]
fn parallel_calls_match_sequential() {
    // Build a handful of distinct positions by letting the greedy bot play
    let mut boards = vec![Board::initial()];
    let mut side = Color::Black;
    for _ in 0..12 {
        let last = *boards.last().unwrap();
        let hops = bot_move(&last, side, Difficulty::Medium, None);
        let Some(hop) = hops.last() else { break };
        boards.push(hop.board);
        side = side.other();
    }

    let sequential: Vec<Vec<Hop>> = boards
        .iter()
        .map(|b| bot_move(b, Color::White, Difficulty::Hard, Some(3)))
        .collect();
    let parallel: Vec<Vec<Hop>> = boards
        .par_iter()
        .map(|b| bot_move(b, Color::White, Difficulty::Hard, Some(3)))
        .collect();
    assert_eq!(sequential, parallel);
}

#[test]
fn bots_play_a_full_game_legally() {
    let mut board = Board::initial();
    let mut side = Color::Black;
    let players = [(Color::Black, Difficulty::Medium), (Color::White, Difficulty::Easy)];
    let bot = Bot::new(BotConfig {
        search_depth: 2,
        chain_depth: 1,
        seed: Some(2024),
    });

    for _ in 0..150 {
        if game_status(&board) != GameStatus::Ongoing {
            break;
        }
        let difficulty = players.iter().find(|(c, _)| *c == side).map(|(_, d)| *d).unwrap();
        let hops = bot.play(&board, side, difficulty);
        assert!(!hops.is_empty(), "ongoing game but no move for {side:?}:\n{board}");
        assert_hops_legal(&board, side, &hops);
        board = hops.last().unwrap().board;
        side = side.other();
    }
}

#[test]
fn difficulty_parsing() {
    assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert!("expert".parse::<Difficulty>().is_err());
    assert_eq!(Difficulty::Medium.to_string(), "medium");
    assert_eq!(
        serde_json::from_str::<Difficulty>("\"medium\"").unwrap(),
        Difficulty::Medium
    );
}

#[test]
fn hops_serialize_with_boards() {
    let hops = bot_move(&double_jump_board(), Color::White, Difficulty::Hard, None);
    let json = serde_json::to_value(&hops).unwrap();
    assert_eq!(json[0]["from"]["row"], 5);
    assert_eq!(json[1]["board"][1][4], "w");
    let back: Vec<Hop> = serde_json::from_value(json).unwrap();
    assert_eq!(back, hops);
}
