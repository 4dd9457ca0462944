//! Tests for decoding constants and result file conventions

#[cfg(test)]
mod tests {
    use mosaic_pd::io::configuration::{
        COLUMN_WRAP_OFFSET, END_RESULT_SENTINEL, INPUT_EXTENSION, MAX_INDIVIDUAL_PROGRESS_BARS,
        MIN_KNOTTED_CROSSINGS, OUTPUT_SUFFIX, RECORD_SEPARATOR, ROW_WRAP_OFFSET,
    };
    use mosaic_pd::spatial::tiles::TileType;

    // Tests both rear offsets together name the rear crossing tile
    // Verified by swapping the row and column offsets
    #[test]
    fn test_wrap_offsets_compose() {
        assert_eq!(
            TileType::from_code(ROW_WRAP_OFFSET),
            Some(TileType::Horizontal)
        );
        assert_eq!(
            TileType::from_code(COLUMN_WRAP_OFFSET),
            Some(TileType::Vertical)
        );
        assert_eq!(
            TileType::from_code(ROW_WRAP_OFFSET + COLUMN_WRAP_OFFSET),
            Some(TileType::RearCrossing)
        );
    }

    // Tests result file conventions stay distinguishable from mosaic input
    #[test]
    fn test_result_format_constants() {
        assert!(END_RESULT_SENTINEL.chars().all(|c| TileType::from_char(c).is_none()));
        assert!(RECORD_SEPARATOR.contains("||"));
        assert!(!OUTPUT_SUFFIX.is_empty());
        assert_eq!(INPUT_EXTENSION, "txt");
    }

    // Tests thresholds are usable
    #[test]
    fn test_thresholds() {
        assert_eq!(MIN_KNOTTED_CROSSINGS, 3);
        assert!(MAX_INDIVIDUAL_PROGRESS_BARS > 0);
    }
}
