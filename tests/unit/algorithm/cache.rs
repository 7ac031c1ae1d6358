//! Tests for the interest window cache

#[cfg(test)]
mod tests {
    use arenagen::algorithm::cache::WindowCache;

    // Verifies repeated radii hit the cache
    // Verified by recomputing on every lookup
    #[test]
    fn test_hits_and_misses() {
        let mut cache = WindowCache::new();
        assert!(cache.is_empty());

        assert_eq!(cache.offsets(2).len(), 25);
        assert_eq!(cache.offsets(2).len(), 25);
        assert_eq!(cache.offsets(1).len(), 9);

        assert_eq!(cache.stats.misses, 2);
        assert_eq!(cache.stats.hits, 1);
        assert_eq!(cache.len(), 2);
    }

    // Tests negative radii produce an empty window
    // Verified by clamping negative radii to zero
    #[test]
    fn test_negative_radius() {
        let mut cache = WindowCache::new();
        assert!(cache.offsets(-1).is_empty());
    }

    // Tests a radius 0 window is just the centre
    // Verified by starting the offset range at -radius - 1
    #[test]
    fn test_zero_radius() {
        let mut cache = WindowCache::new();
        assert_eq!(cache.offsets(0), &[[0, 0]]);
    }
}
