//! Tile identity continuity across turns

use twenty48::core::{apply_move, reconcile, Grid, TileIdAllocator};
use twenty48::types::{Direction, Position};

#[test]
fn test_untouched_tile_keeps_identity() {
    let mut ids = TileIdAllocator::new();
    let before = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 8]]);
    let first = reconcile(&before, &[], &mut ids);

    // Only a distant cell changes.
    let after = before.with_cell(Position::new(3, 3), Some(16));
    let second = reconcile(&after, &first, &mut ids);

    let corner = second.iter().find(|t| t.position == Position::new(0, 0)).unwrap();
    assert_eq!(corner.id, first[0].id);
    assert!(!corner.is_new);
    assert!(!corner.is_merged);

    let changed = second.iter().find(|t| t.position == Position::new(3, 3)).unwrap();
    assert_ne!(changed.id, first[1].id);
    assert!(changed.is_new);
    assert!(changed.is_merged);
}

#[test]
fn test_merged_tile_gets_new_identity() {
    let mut ids = TileIdAllocator::new();
    let before = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let first = reconcile(&before, &[], &mut ids);

    let moved = apply_move(&before, Direction::Left);
    let second = reconcile(&moved.grid, &first, &mut ids);

    assert_eq!(second.len(), 1);
    let merged = second[0];
    assert_eq!(merged.value, 4);
    assert_eq!(merged.position, Position::new(0, 0));
    assert!(merged.is_new);
    assert!(merged.is_merged);
    assert!(first.iter().all(|t| t.id != merged.id));
}

#[test]
fn test_slid_tile_is_treated_as_new() {
    // Identity is positional: a tile that slides to a different cell is new there.
    let mut ids = TileIdAllocator::new();
    let before = Grid::from_rows([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);
    let first = reconcile(&before, &[], &mut ids);

    let moved = apply_move(&before, Direction::Left);
    let second = reconcile(&moved.grid, &first, &mut ids);

    assert_eq!(second[0].position, Position::new(0, 0));
    assert!(second[0].is_new);
    assert!(!second[0].is_merged);
    assert_ne!(second[0].id, first[0].id);
}

#[test]
fn test_ids_are_monotonic_until_reset() {
    let mut ids = TileIdAllocator::new();
    let a = ids.allocate();
    let b = ids.allocate();
    assert!(b.get() > a.get());
    assert_eq!(a.to_string(), "tile-0");

    ids.reset();
    assert_eq!(ids.allocate(), a);
}
