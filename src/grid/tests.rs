//! Tests for the grid module.

use std::cell::Cell;

use super::*;

fn char_grid(lines: &[&str]) -> Grid<char> {
    Grid::from_lines(lines.iter().copied(), |c| c).unwrap()
}

#[test]
fn test_set_get_round_trip() {
    let mut grid = Grid::new(3, 4, 0u32).unwrap();
    grid.set(2, 3, 42).unwrap();
    grid.set(0, 0, 7).unwrap();
    assert_eq!(*grid.get(2, 3).unwrap(), 42);
    assert_eq!(*grid.get(0, 0).unwrap(), 7);
    assert_eq!(*grid.get(1, 1).unwrap(), 0);
}

#[test]
fn test_get_out_of_bounds() {
    let grid = Grid::new(2, 2, 0u8).unwrap();
    assert!(matches!(
        grid.get(2, 0),
        Err(GridError::OutOfBounds { row: 2, col: 0, rows: 2, cols: 2 })
    ));
    assert!(matches!(grid.get(0, 2), Err(GridError::OutOfBounds { .. })));
}

#[test]
fn test_set_out_of_bounds() {
    let mut grid = Grid::new(2, 2, 0u8).unwrap();
    assert!(matches!(grid.set(5, 5, 1), Err(GridError::OutOfBounds { .. })));
}

#[test]
fn test_from_vec_dimension_mismatch() {
    // 2x3 grid needs exactly 6 cells, never truncated or padded
    assert!(matches!(
        Grid::from_vec(2, 3, vec![0u8; 5]),
        Err(GridError::DimensionMismatch { rows: 2, cols: 3, len: 5 })
    ));
    assert!(matches!(
        Grid::from_vec(2, 3, vec![0u8; 7]),
        Err(GridError::DimensionMismatch { .. })
    ));
    assert!(Grid::from_vec(2, 3, vec![0u8; 6]).is_ok());
}

#[test]
fn test_zero_dimension_rejected() {
    assert!(matches!(
        Grid::new(0, 3, 'x'),
        Err(GridError::ZeroDimension { rows: 0, cols: 3 })
    ));
    assert!(matches!(
        Grid::new(3, 0, 'x'),
        Err(GridError::ZeroDimension { .. })
    ));
    let no_lines: [&str; 0] = [];
    assert!(matches!(
        Grid::<char>::from_lines(no_lines, |c| c),
        Err(GridError::ZeroDimension { .. })
    ));
}

#[test]
fn test_from_lines_ragged_input_rejected() {
    assert!(matches!(
        Grid::from_lines(["abc", "de"], |c| c),
        Err(GridError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_clone_is_independent() {
    let mut original = Grid::new(2, 2, 0u8).unwrap();
    let mut copy = original.clone();

    original.set(0, 0, 1).unwrap();
    assert_eq!(*copy.get(0, 0).unwrap(), 0);

    copy.set(1, 1, 9).unwrap();
    assert_eq!(*original.get(1, 1).unwrap(), 0);
}

#[test]
fn test_get_span() {
    let grid = char_grid(&["abc", "def"]);
    assert_eq!(grid.get_span(Location::with_span(1, 0, 3)).unwrap(), &['d', 'e', 'f']);
    assert_eq!(grid.get_span(Location::new(0, 2)).unwrap(), &['c']);
}

#[test]
fn test_get_span_crossing_right_edge() {
    let grid = char_grid(&["abc", "def"]);
    assert!(matches!(
        grid.get_span(Location::with_span(0, 2, 2)),
        Err(GridError::SpanOverflow { col: 2, span: 2, cols: 3 })
    ));
}

#[test]
fn test_row() {
    let grid = char_grid(&["..#", ".#.", "#.."]);
    assert_eq!(grid.row(1).unwrap(), &['.', '#', '.']);
    assert!(matches!(grid.row(3), Err(GridError::OutOfBounds { .. })));
}

#[test]
fn test_find_matches_individual_cells() {
    let grid = char_grid(&["..#", ".#.", "#.."]);
    let matches: Vec<Location> = grid.find_matches(false, |c| *c == '#').collect();
    assert_eq!(
        matches,
        vec![Location::new(0, 2), Location::new(1, 1), Location::new(2, 0)]
    );
    assert!(matches.iter().all(|location| location.span == 1));
}

#[test]
fn test_find_matches_merges_runs_within_row() {
    let grid = char_grid(&[".##.##."]);
    let runs: Vec<Location> = grid.find_matches(true, |c| *c == '#').collect();
    assert_eq!(
        runs,
        vec![Location::with_span(0, 1, 2), Location::with_span(0, 4, 2)]
    );
}

#[test]
fn test_find_matches_flushes_run_at_row_edge() {
    // a run touching the right edge is flushed, and runs never continue
    // into the next row
    let grid = char_grid(&["..##", "##.."]);
    let runs: Vec<Location> = grid.find_matches(true, |c| *c == '#').collect();
    assert_eq!(
        runs,
        vec![Location::with_span(0, 2, 2), Location::with_span(1, 0, 2)]
    );
}

#[test]
fn test_find_matches_full_row_run() {
    let grid = char_grid(&["###", "..."]);
    let runs: Vec<Location> = grid.find_matches(true, |c| *c == '#').collect();
    assert_eq!(runs, vec![Location::with_span(0, 0, 3)]);
}

#[test]
fn test_find_matches_is_restartable() {
    let grid = char_grid(&["#.#", ".#."]);
    let first: Vec<Location> = grid.find_matches(false, |c| *c == '#').collect();
    let second: Vec<Location> = grid.find_matches(false, |c| *c == '#').collect();
    assert_eq!(first, second);
}

#[test]
fn test_find_matches_scans_lazily() {
    // stopping after the first hit inspects nothing past it
    let grid = char_grid(&["#..", "..."]);
    let inspected = Cell::new(0usize);
    let first = grid
        .find_matches(false, |c| {
            inspected.set(inspected.get() + 1);
            *c == '#'
        })
        .next();
    assert_eq!(first, Some(Location::new(0, 0)));
    assert_eq!(inspected.get(), 1);
}

#[test]
fn test_adjacent_interior_cell_has_eight_neighbors() {
    let grid = char_grid(&["abc", "def", "ghi"]);
    let neighbors: Vec<(Location, char)> = grid
        .adjacent(Location::new(1, 1))
        .unwrap()
        .map(|(location, c)| (location, *c))
        .collect();
    assert_eq!(
        neighbors,
        vec![
            (Location::new(0, 0), 'a'),
            (Location::new(0, 1), 'b'),
            (Location::new(0, 2), 'c'),
            (Location::new(1, 0), 'd'),
            (Location::new(1, 2), 'f'),
            (Location::new(2, 0), 'g'),
            (Location::new(2, 1), 'h'),
            (Location::new(2, 2), 'i'),
        ]
    );
}

#[test]
fn test_adjacent_excludes_occupied_span_only() {
    // span covers cols 2..5 of row 1; same-row cells outside the span are
    // neighbors, cells inside it never are
    let grid = char_grid(&["abcdefg", "hijklmn", "opqrstu"]);
    let location = Location::with_span(1, 2, 3);
    let values: Vec<char> = grid
        .adjacent(location)
        .unwrap()
        .map(|(_, c)| *c)
        .collect();
    assert_eq!(values, vec!['b', 'c', 'd', 'e', 'f', 'i', 'm', 'p', 'q', 'r', 's', 't']);

    let excluded: Vec<char> = grid.get_span(location).unwrap().to_vec();
    assert_eq!(excluded, vec!['j', 'k', 'l']);
    assert!(values.iter().all(|c| !excluded.contains(c)));
}

#[test]
fn test_adjacent_clips_at_corner() {
    let grid = char_grid(&["ab", "cd"]);
    let neighbors: Vec<char> = grid
        .adjacent(Location::new(0, 0))
        .unwrap()
        .map(|(_, c)| *c)
        .collect();
    assert_eq!(neighbors, vec!['b', 'c', 'd']);
}

#[test]
fn test_adjacent_with_wider_margin() {
    // margin 2 from the center of a 5x5 grid covers everything but the center
    let grid = Grid::from_vec(5, 5, (0..25u8).collect()).unwrap();
    let count = grid
        .adjacent_with_margin(Location::new(2, 2), 2)
        .unwrap()
        .count();
    assert_eq!(count, 24);
}

#[test]
fn test_adjacent_rejects_out_of_bounds_location() {
    let grid = char_grid(&["ab", "cd"]);
    assert!(grid.adjacent(Location::new(2, 0)).is_err());
    assert!(grid.adjacent(Location::with_span(0, 1, 2)).is_err());
}

#[test]
fn test_cross_interior_order() {
    let grid = char_grid(&["abc", "def", "ghi"]);
    let neighbors: Vec<Location> = grid.cross(Location::new(1, 1)).unwrap().collect();
    assert_eq!(
        neighbors,
        vec![
            Location::new(0, 1), // north
            Location::new(1, 2), // east
            Location::new(2, 1), // south
            Location::new(1, 0), // west
        ]
    );
}

#[test]
fn test_cross_clips_at_corner() {
    let grid = char_grid(&["abc", "def", "ghi"]);
    let from_origin: Vec<Location> = grid.cross(Location::new(0, 0)).unwrap().collect();
    assert_eq!(from_origin, vec![Location::new(0, 1), Location::new(1, 0)]);

    let from_far_corner: Vec<Location> = grid.cross(Location::new(2, 2)).unwrap().collect();
    assert_eq!(from_far_corner, vec![Location::new(1, 2), Location::new(2, 1)]);
}

#[test]
fn test_subset_center_covers_whole_grid() {
    let grid = char_grid(&["abc", "def", "ghi"]);
    let sub = grid.subset(Location::new(1, 1), 1).unwrap();
    assert_eq!(sub, grid);
}

#[test]
fn test_subset_clips_at_corner() {
    let grid = char_grid(&["abc", "def", "ghi"]);
    let sub = grid.subset(Location::new(0, 0), 1).unwrap();
    assert_eq!(sub.rows(), 2);
    assert_eq!(sub.cols(), 2);
    assert_eq!(sub.row(0).unwrap(), &['a', 'b']);
    assert_eq!(sub.row(1).unwrap(), &['d', 'e']);
}

#[test]
fn test_subset_includes_span_footprint() {
    let grid = char_grid(&["abcdef", "ghijkl", "mnopqr"]);
    let sub = grid.subset(Location::with_span(1, 2, 2), 1).unwrap();
    // rows 0..=2, cols 1..=4
    assert_eq!(sub.rows(), 3);
    assert_eq!(sub.cols(), 4);
    assert_eq!(sub.row(1).unwrap(), &['h', 'i', 'j', 'k']);
}

#[test]
fn test_subset_is_independent_copy() {
    let grid = char_grid(&["ab", "cd"]);
    let mut sub = grid.subset(Location::new(0, 0), 1).unwrap();
    sub.set(0, 0, 'z').unwrap();
    assert_eq!(*grid.get(0, 0).unwrap(), 'a');
}

#[test]
fn test_render() {
    let grid = char_grid(&["..#", ".#.", "#.."]);
    let expected = ["..#", ".#.", "#.."].join(LINE_SEPARATOR);
    assert_eq!(grid.render(|c| c.to_string()), expected);
}

#[test]
fn test_error_messages_name_the_violation() {
    let grid = Grid::new(2, 2, 0u8).unwrap();
    let err = grid.get(3, 1).unwrap_err();
    assert_eq!(err.to_string(), "cell (3, 1) is out of bounds for a 2x2 grid");

    let err = Grid::from_vec(2, 3, vec![0u8; 4]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "backing store of 4 cells does not match a 2x3 grid"
    );
}
