mod tests {
    use tcs_sonar_engine::math::{constrain, remap, remap_to_u8};

    #[test]
    fn test_remap() {
        assert_eq!(remap(0, 0, 10, 0, 100), 0);
        assert_eq!(remap(5, 0, 10, 0, 100), 50);
        assert_eq!(remap(10, 0, 10, 0, 100), 100);
        // Inverted output range
        assert_eq!(remap(25, 25, 140, 255, 0), 255);
        assert_eq!(remap(140, 25, 140, 255, 0), 0);
        // Truncates toward zero
        assert_eq!(remap(97, 25, 170, 255, 0), 129);
        // Extrapolates without clamping
        assert_eq!(remap(0, 25, 140, 255, 0), 310);
    }

    #[test]
    fn test_remap_degenerate_range() {
        assert_eq!(remap(10, 50, 50, 255, 0), 255);
        assert_eq!(remap(50, 50, 50, 255, 0), 255);
        assert_eq!(remap(51, 50, 50, 255, 0), 0);
    }

    #[test]
    fn test_constrain() {
        assert_eq!(constrain(-5, 0, 255), 0);
        assert_eq!(constrain(128, 0, 255), 128);
        assert_eq!(constrain(310, 0, 255), 255);
    }

    #[test]
    fn test_remap_to_u8_stays_in_range() {
        for raw in [0_i64, 1, 24, 25, 80, 140, 141, 1000, 1_000_000] {
            let value = remap_to_u8(raw, 25, 140, 255, 0);
            if raw <= 25 {
                assert_eq!(value, 255);
            }
            if raw >= 140 {
                assert_eq!(value, 0);
            }
        }
        assert_eq!(remap_to_u8(i64::from(u32::MAX), 25, 140, 255, 0), 0);
    }
}
