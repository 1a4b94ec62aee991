//! Tests for coordinates, bounding boxes and the sparse tile map

#[cfg(test)]
mod tests {
    use crosswave::spatial::grid::{Axis, BoundingBox, Coordinate, TileMap};
    use crosswave::spatial::letters::LetterSet;
    use crosswave::spatial::tiles::Tile;

    // Tests stepping along both axes in both directions
    // Verified by swapping the axes in step
    #[test]
    fn test_coordinate_step_and_along() {
        let at = Coordinate::new(2, -1);

        assert_eq!(at.step(Axis::Horizontal, 3), Coordinate::new(5, -1));
        assert_eq!(at.step(Axis::Vertical, -2), Coordinate::new(2, -3));
        assert_eq!(at.along(Axis::Horizontal), 2);
        assert_eq!(at.along(Axis::Vertical), -1);
        assert_eq!(Axis::Horizontal.perpendicular(), Axis::Vertical);
        assert_eq!(Axis::Vertical.perpendicular(), Axis::Horizontal);
    }

    // Tests the four orthogonal neighbours
    // Verified by returning a diagonal neighbour
    #[test]
    fn test_coordinate_neighbours() {
        let neighbours = Coordinate::new(0, 0).neighbours();
        assert_eq!(
            neighbours,
            [
                Coordinate::new(-1, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, -1),
                Coordinate::new(0, 1),
            ]
        );
    }

    // Tests a fixed letter survives open and fixed overwrites
    // Verified by removing the fixed-tile guard from set
    #[test]
    fn test_fixed_tile_is_never_overwritten() {
        let mut map = TileMap::new();
        let at = Coordinate::new(4, 4);
        map.set(at, Tile::Fixed('a'));

        map.set(at, Tile::open());
        map.set(at, Tile::Fixed('b'));
        map.reset_to_open(at);
        map.reset_to_open(at);

        assert_eq!(map.letter(at), Some('a'));
        assert!(map.is_fixed(at));
        assert_eq!(map.len(), 1);
    }

    // Tests resetting an open tile discards its candidates
    // Verified by skipping the overwrite for open tiles
    #[test]
    fn test_reset_to_open_clears_candidates() {
        let mut map = TileMap::new();
        let at = Coordinate::new(0, 1);
        map.set(at, Tile::Open("xyz".chars().collect()));

        map.reset_to_open(at);

        assert_eq!(
            map.get(at).and_then(Tile::candidates),
            Some(&LetterSet::new())
        );
    }

    // Tests absent keys differ from open tiles
    // Verified by inserting open tiles on lookup
    #[test]
    fn test_absent_versus_open() {
        let mut map = TileMap::new();
        let touched = Coordinate::new(1, 1);
        map.reset_to_open(touched);

        assert!(map.get(touched).is_some());
        assert!(map.get(Coordinate::new(2, 2)).is_none());
        assert!(!map.is_fixed(touched));
        assert_eq!(map.letter(touched), None);
    }

    // Tests iteration runs by column then row
    // Verified by ordering coordinates by row first
    #[test]
    fn test_iteration_order() {
        let mut map = TileMap::new();
        map.set(Coordinate::new(1, 0), Tile::open());
        map.set(Coordinate::new(0, 5), Tile::Fixed('a'));
        map.set(Coordinate::new(0, -1), Tile::open());

        let order: Vec<Coordinate> = map.iter().map(|(at, _)| at).collect();
        assert_eq!(
            order,
            vec![
                Coordinate::new(0, -1),
                Coordinate::new(0, 5),
                Coordinate::new(1, 0),
            ]
        );
        assert_eq!(
            map.fixed_coordinates().collect::<Vec<_>>(),
            vec![Coordinate::new(0, 5)]
        );
        assert_eq!(map.fixed_count(), 1);
    }

    // Tests bounding boxes over all keys and over letters only
    // Verified by including open tiles in letter_bounds
    #[test]
    fn test_bounding_boxes() {
        let mut map = TileMap::new();
        assert!(map.bounding_box().is_none());
        assert!(map.letter_bounds().is_none());
        assert!(map.is_empty());

        map.set(Coordinate::new(0, 0), Tile::Fixed('a'));
        map.set(Coordinate::new(2, 1), Tile::Fixed('b'));
        map.set(Coordinate::new(-3, 4), Tile::open());

        let all = map.bounding_box();
        assert_eq!(
            all,
            Some(BoundingBox {
                min: Coordinate::new(-3, 0),
                max: Coordinate::new(2, 4),
            })
        );

        let letters = map.letter_bounds();
        assert_eq!(
            letters,
            Some(BoundingBox {
                min: Coordinate::new(0, 0),
                max: Coordinate::new(2, 1),
            })
        );
        assert!(letters.is_some_and(|bounds| bounds.width() == 3 && bounds.height() == 2));
        assert!(letters.is_some_and(|bounds| bounds.area() == 6));
    }

    // Tests bounding box containment is inclusive
    // Verified by making the max comparison exclusive
    #[test]
    fn test_bounding_box_contains() {
        let bounds = BoundingBox {
            min: Coordinate::new(-1, -1),
            max: Coordinate::new(1, 2),
        };

        assert!(bounds.contains(Coordinate::new(1, 2)));
        assert!(bounds.contains(Coordinate::new(-1, -1)));
        assert!(!bounds.contains(Coordinate::new(2, 0)));
        assert!(!bounds.contains(Coordinate::new(0, -2)));
        assert_eq!(bounds.area(), 12);
    }
}
