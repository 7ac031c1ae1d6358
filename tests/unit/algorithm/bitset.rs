//! Tests for `TileBitset` set operations over tile types

#[cfg(test)]
mod tests {
    use arenagen::algorithm::bitset::TileBitset;
    use arenagen::spatial::tiles::TileType;

    // Verifies a new bitset is empty with count 0
    // Verified by initializing the bit vector with ones
    #[test]
    fn test_new_bitset_is_empty() {
        let bitset = TileBitset::new();
        assert!(bitset.is_empty());
        assert_eq!(bitset.count(), 0);
        assert_eq!(bitset.to_vec(), vec![]);
    }

    // Tests insertion, removal and membership
    // Verified by making remove a no-op
    #[test]
    fn test_insert_remove_contains() {
        let mut bitset = TileBitset::new();
        bitset.insert(TileType::Cross);
        bitset.insert(TileType::Vertical);
        assert!(bitset.contains(TileType::Cross));
        assert!(bitset.contains(TileType::Vertical));
        assert!(!bitset.contains(TileType::Horizontal));

        bitset.remove(TileType::Cross);
        assert!(!bitset.contains(TileType::Cross));
        assert_eq!(bitset.count(), 1);
    }

    // Tests intersection keeps only shared tiles
    // Verified by swapping intersection for union
    #[test]
    fn test_intersection() {
        let a: TileBitset = [TileType::Cross, TileType::TeeUp, TileType::Horizontal]
            .into_iter()
            .collect();
        let b: TileBitset = [TileType::TeeUp, TileType::Horizontal, TileType::Vertical]
            .into_iter()
            .collect();

        let shared = a.intersection(&b);
        assert_eq!(shared.to_vec(), vec![TileType::TeeUp, TileType::Horizontal]);
        assert!(shared.is_subset(&a));
        assert!(shared.is_subset(&b));
    }

    // Tests in-place union merges both sets
    // Verified by replacing |= with &=
    #[test]
    fn test_union_with() {
        let mut a = TileBitset::single(TileType::Cross);
        a.union_with(&TileBitset::single(TileType::Vertical));
        assert_eq!(a.to_vec(), vec![TileType::Cross, TileType::Vertical]);
    }

    // Tests the full set holds every tile, the fallback marker included
    // Verified by building the full set with one bit fewer
    #[test]
    fn test_all_contains_every_tile() {
        let all = TileBitset::all();
        assert_eq!(all.count(), TileType::COUNT);
        assert!(all.contains(TileType::Void));
        assert_eq!(all.to_vec(), TileType::ALL.to_vec());
    }

    // Tests subset checks against disjoint sets
    // Verified by inverting the containment test in is_subset
    #[test]
    fn test_is_subset() {
        let small = TileBitset::single(TileType::TeeLeft);
        let other = TileBitset::single(TileType::TeeRight);
        assert!(small.is_subset(&TileBitset::all()));
        assert!(!small.is_subset(&other));
        assert!(TileBitset::new().is_subset(&other));
    }

    // Tests display lists tile codes in ordinal order
    // Verified by dropping the separator
    #[test]
    fn test_display() {
        let set: TileBitset = [TileType::Horizontal, TileType::Cross].into_iter().collect();
        assert_eq!(set.to_string(), "{C H}");
        assert_eq!(TileBitset::new().to_string(), "{}");
    }
}
