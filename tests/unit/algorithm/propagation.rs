//! Tests for neighbour reset and candidate letter propagation

#[cfg(test)]
mod tests {
    use crosswave::algorithm::insertion::seed_map;
    use crosswave::algorithm::propagation::{can_fill, fill_candidates, reset_neighbours};
    use crosswave::algorithm::words::WordSet;
    use crosswave::spatial::{Axis, Coordinate, LetterSet, Tile, TileMap};

    fn red() -> TileMap {
        seed_map("red", Coordinate::new(0, 0), Axis::Horizontal)
    }

    fn candidates_at(map: &TileMap, x: i32, y: i32) -> Vec<char> {
        map.get(Coordinate::new(x, y))
            .and_then(Tile::candidates)
            .map(LetterSet::to_vec)
            .unwrap_or_default()
    }

    // Tests every orthogonal neighbour of a letter becomes an empty open tile
    // Verified by resetting diagonal neighbours too
    #[test]
    fn test_reset_neighbours() {
        let mut map = red();
        reset_neighbours(&mut map);

        assert_eq!(map.len(), 11);
        assert_eq!(map.fixed_count(), 3);
        for at in [
            Coordinate::new(-1, 0),
            Coordinate::new(3, 0),
            Coordinate::new(0, -1),
            Coordinate::new(1, 1),
        ] {
            assert_eq!(map.get(at), Some(&Tile::open()));
        }
        assert!(map.get(Coordinate::new(-1, -1)).is_none());
    }

    // Tests stale candidates are cleared while letters survive
    // Verified by skipping tiles that already exist
    #[test]
    fn test_reset_clears_stale_candidates() {
        let mut map = red();
        map.set(Coordinate::new(1, -1), Tile::Open("zq".chars().collect()));

        reset_neighbours(&mut map);

        assert!(candidates_at(&map, 1, -1).is_empty());
        assert_eq!(map.letter(Coordinate::new(1, 0)), Some('e'));
    }

    // Tests the letter a word would put on a cell when crossing a letter
    // Verified by scanning origins forwards instead of backwards
    #[test]
    fn test_can_fill_through_shared_letter() {
        let map = red();

        assert_eq!(
            can_fill(&map, "blue", Coordinate::new(1, -1), Axis::Vertical),
            Some('u')
        );
        assert_eq!(
            can_fill(&map, "blue", Coordinate::new(0, -1), Axis::Vertical),
            None
        );
    }

    // Tests scanning from a cell right after a letter covers that letter
    // Verified by always starting the scan at the cell itself
    #[test]
    fn test_can_fill_after_letter() {
        let map = red();

        // "red" running down from the 'r' puts its 'e' below it
        assert_eq!(
            can_fill(&map, "red", Coordinate::new(0, 1), Axis::Vertical),
            Some('e')
        );
        assert_eq!(
            can_fill(&map, "blue", Coordinate::new(1, 1), Axis::Vertical),
            None
        );
    }

    // Tests candidates come from every pending word that fits
    // Verified by stopping after the first word with a candidate
    #[test]
    fn test_fill_candidates() {
        let mut map = red();
        let words = WordSet::new(["blue", "tube", "fox"]).expect("valid words");

        reset_neighbours(&mut map);
        fill_candidates(&mut map, &words);

        assert_eq!(candidates_at(&map, 1, -1), vec!['b', 'u']);
        for (x, y) in [(-1, 0), (3, 0), (0, -1), (2, -1), (0, 1), (2, 1)] {
            assert!(
                candidates_at(&map, x, y).is_empty(),
                "unexpected candidates at ({x}, {y})"
            );
        }
    }

    // Tests corner tiles receive no candidates
    // Verified by filling corners along the horizontal axis
    #[test]
    fn test_fill_skips_corners() {
        let mut map = TileMap::new();
        map.set(Coordinate::new(0, 0), Tile::Fixed('a'));
        map.set(Coordinate::new(1, 1), Tile::Fixed('b'));
        let words = WordSet::new(["ab", "ba", "abba"]).expect("valid words");

        reset_neighbours(&mut map);
        fill_candidates(&mut map, &words);

        assert!(candidates_at(&map, 1, 0).is_empty());
        assert!(candidates_at(&map, 0, 1).is_empty());
    }
}
