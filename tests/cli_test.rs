#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use broadside::cli::{format_board, format_player_view, format_stats, parse_coord};
    use broadside::{
        col_label, row_label, Board, CellState, CoordLabel, Difficulty, Session, Side, Stats,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1"), Some((0, 0)));
        assert_eq!(parse_coord("b7"), Some((6, 1)));
        assert_eq!(parse_coord(" J10 "), Some((9, 9)));
        assert_eq!(parse_coord("K1"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("A11"), None);
        assert_eq!(parse_coord("5A"), None);
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("A"), None);
        assert_eq!(parse_coord("A+5"), None);
        assert_eq!(parse_coord("A-5"), None);
        assert_eq!(parse_coord("A 5"), None);
    }

    #[test]
    fn test_labels_match_parser() {
        assert_eq!(row_label(0), 1);
        assert_eq!(col_label(0), 'A');
        assert_eq!(col_label(9), 'J');
        let label = CoordLabel((6, 1)).to_string();
        assert_eq!(label, "B7");
        assert_eq!(parse_coord(&label), Some((6, 1)));
    }

    #[test]
    fn test_labels_off_board() {
        assert_eq!(col_label(26), '?');
        assert_eq!(col_label(200), '?');
        assert_eq!(col_label(usize::MAX), '?');
        assert_eq!(row_label(usize::MAX), usize::MAX);
        assert_eq!(CoordLabel((0, 200)).to_string(), "(0, 200)");
        assert_eq!(
            CoordLabel((usize::MAX, 0)).to_string(),
            format!("({}, 0)", usize::MAX)
        );
    }

    #[test]
    fn test_format_board_hides_ships() {
        let board = Board::new()
            .with_cell(0, 0, CellState::Ship)
            .unwrap()
            .with_cell(1, 2, CellState::Miss)
            .unwrap()
            .with_cell(9, 9, CellState::Hit)
            .unwrap();
        let hidden = format_board(&board, false);
        let shown = format_board(&board, true);

        let lines: Vec<_> = hidden.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0].trim(), "A B C D E F G H I J");
        assert!(lines[1].starts_with(" 1"));
        assert!(!hidden.contains('S'));
        assert!(shown.lines().nth(1).unwrap().contains('S'));
        assert_eq!(lines[2].split_whitespace().nth(3), Some("o"));
        assert!(lines[10].ends_with('X'));
    }

    #[test]
    fn test_format_stats() {
        let stats = Stats::new();
        let text = format_stats(&stats, Some(Side::Player));
        assert!(text.contains("Accuracy"));
        assert!(text.contains("0.0%"));
        assert!(text.ends_with("Victory!\n"));
        assert!(!format_stats(&stats, None).contains("Defeat"));
    }

    #[test]
    fn test_player_view_hides_computer_fleet() {
        let mut session = Session::new(Difficulty::Normal, SmallRng::seed_from_u64(12345));
        session.place_randomly().unwrap();
        let view = format_player_view(&session);
        let (top, bottom) = view.split_once("Your fleet:").unwrap();
        assert!(!top.contains('S'));
        assert!(bottom.contains('S'));
    }
}
