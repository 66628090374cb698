//! Property tests for directions, doors and board mutations.

use proptest::prelude::*;

use shifting_maze::core::{Axis, BoardConfig, Direction, MazeRng, Position, Rotation};
use shifting_maze::tiles::{Doors, Tile, TileBag, TileNumber};
use shifting_maze::Board;

fn direction() -> impl Strategy<Value = Direction> {
    (0u8..4).prop_map(Direction::from_index)
}

fn rotation() -> impl Strategy<Value = Rotation> {
    (0u8..4).prop_map(Rotation::from_steps)
}

/// Board of the given size with random doors and rotations.
fn board(width: usize, height: usize, seed: u64) -> Board {
    let mut rng = MazeRng::new(seed);
    let tiles = (0..(width * height) as u32)
        .map(|n| {
            let doors = Doors::from_bits(rng.gen_range_usize(0..16) as u8);
            let mut tile = Tile::new(TileNumber::new(n), doors);
            tile.randomize_rotation(&mut rng);
            tile
        })
        .collect();
    Board::from_tiles(&BoardConfig::new(width, height), tiles).unwrap()
}

fn sorted_numbers(board: &Board) -> Vec<u32> {
    let mut numbers: Vec<u32> = board.tile_numbers().into_iter().map(TileNumber::raw).collect();
    numbers.sort_unstable();
    numbers
}

proptest! {
    #[test]
    fn prop_four_quarter_turns_are_identity(d in direction()) {
        let turned = d.rotate_clockwise().rotate_clockwise().rotate_clockwise().rotate_clockwise();
        prop_assert_eq!(turned, d);
        prop_assert_eq!(d.rotate_clockwise().rotate_anticlockwise(), d);
    }

    #[test]
    fn prop_opposite_is_involution(d in direction()) {
        prop_assert_eq!(d.opposite().opposite(), d);
        prop_assert_ne!(d.opposite(), d);
        prop_assert_eq!(d + Rotation::HALF, d.opposite());
    }

    #[test]
    fn prop_move_then_back_returns(x in -100i32..100, y in -100i32..100, d in direction()) {
        let pos = Position::new(x, y);
        prop_assert_eq!(pos.moved(d).moved(d.opposite()), pos);
    }

    #[test]
    fn prop_rotated_doors_match_rotated_directions(bits in 0u8..16, r in rotation(), d in direction()) {
        let doors = Doors::from_bits(bits);
        prop_assert_eq!(doors.rotated(r).contains(d + r), doors.contains(d));
        prop_assert_eq!(doors.rotated(r).len(), doors.len());
    }

    #[test]
    fn prop_check_for_door_is_symmetric(
        seed in any::<u64>(),
        x in 0i32..5,
        y in 0i32..5,
        d in direction(),
    ) {
        let board = board(5, 5, seed);
        let pos = Position::new(x, y);
        let next = pos.moved(d);
        prop_assert_eq!(
            board.check_for_door(pos, d),
            board.check_for_door(next, d.opposite())
        );
    }

    #[test]
    fn prop_slide_conserves_tiles(
        seed in any::<u64>(),
        index in 0usize..4,
        d in direction(),
    ) {
        let mut board = board(4, 4, seed);
        let before = sorted_numbers(&board);
        let axis = d.axis();

        let out = board
            .slide_line(axis, index, d, Tile::new(TileNumber::new(99), Doors::ALL))
            .unwrap()
            .unwrap();

        let mut after = sorted_numbers(&board);
        after.push(out.number().raw());
        after.sort_unstable();
        let mut expected = before;
        expected.push(99);
        expected.sort_unstable();
        prop_assert_eq!(after, expected);
        prop_assert_eq!(board.tile_count(), 16);
    }

    #[test]
    fn prop_wrong_axis_is_rejected(seed in any::<u64>(), index in 0usize..4, d in direction()) {
        let mut board = board(4, 4, seed);
        let before = board.snapshot();
        let wrong_axis = match d.axis() {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        };

        let rejected = board
            .slide_line(wrong_axis, index, d, Tile::new(TileNumber::new(99), Doors::ALL))
            .unwrap_err();
        prop_assert_eq!(rejected.into_inner().number(), TileNumber::new(99));
        prop_assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn prop_bag_draw_return_round_trip(seed in any::<u64>(), size in 1usize..50, take in 0usize..50) {
        let mut rng = MazeRng::new(seed);
        let tiles = (0..size as u32).map(|n| Tile::new(TileNumber::new(n), Doors::NONE)).collect();
        let mut bag = TileBag::from_tiles(tiles, &mut rng).unwrap();

        match bag.draw_tiles(take) {
            Ok(drawn) => {
                prop_assert_eq!(bag.len(), size - take);
                bag.return_tiles(drawn).unwrap();
            }
            Err(_) => prop_assert!(take > size),
        }
        prop_assert_eq!(bag.len(), size);
    }
}
