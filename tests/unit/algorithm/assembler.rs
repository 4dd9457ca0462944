//! Tests for crossing orientation and PD code assembly

#[cfg(test)]
mod tests {
    use mosaic_pd::algorithm::assembler::{CrossingRecord, PdCode, assemble};
    use mosaic_pd::spatial::grid::Position;
    use mosaic_pd::spatial::tiles::TileType;

    fn record(cell: usize, tile: TileType, strands: [u32; 4], entries: [bool; 4]) -> CrossingRecord {
        CrossingRecord {
            position: Position::front(cell),
            tile,
            strands,
            entries,
        }
    }

    // Raw slots of the trefoil "0021002a91063940354000000" in discovery order
    fn trefoil_records() -> Vec<CrossingRecord> {
        vec![
            record(
                7,
                TileType::HorizontalOver,
                [4, 1, 5, 2],
                [true, true, false, false],
            ),
            record(
                13,
                TileType::VerticalOver,
                [3, 6, 2, 5],
                [false, false, true, true],
            ),
            record(
                8,
                TileType::VerticalOver,
                [3, 7, 4, 6],
                [true, false, false, true],
            ),
        ]
    }

    // Tests the rotation depends on tile handedness and under-strand direction
    // Verified by swapping the forward and backward rotations
    #[test]
    fn test_rotation_rules() {
        let strands = [10, 20, 30, 40];
        let left = [true, false, false, false];
        let right = [false, false, true, false];
        let down = [false, true, false, false];
        let up = [false, false, false, true];

        assert_eq!(record(0, TileType::VerticalOver, strands, left).rotation(), 0);
        assert_eq!(record(0, TileType::VerticalOver, strands, right).rotation(), 2);
        assert_eq!(record(0, TileType::HorizontalOver, strands, down).rotation(), 1);
        assert_eq!(record(0, TileType::HorizontalOver, strands, up).rotation(), 3);
        assert_eq!(record(0, TileType::RearCrossing, strands, down).rotation(), 1);
        assert_eq!(record(0, TileType::RearCrossing, strands, up).rotation(), 3);

        assert_eq!(
            record(0, TileType::HorizontalOver, strands, down).oriented(),
            [20, 30, 40, 10]
        );
        assert_eq!(
            record(0, TileType::VerticalOver, strands, right).oriented(),
            [30, 40, 10, 20]
        );
    }

    // Tests assembly of the trefoil including the closing label fold
    // Verified by leaving the final strand label in place
    #[test]
    fn test_assemble_trefoil() {
        let code = assemble(&trefoil_records(), 7);
        assert_eq!(
            code,
            Some(PdCode::new(vec![[1, 5, 2, 4], [2, 5, 3, 6], [3, 1, 4, 6]]))
        );
    }

    // Tests only the first matching label of the last tuple is folded
    #[test]
    fn test_fold_replaces_first_occurrence_only() {
        let mut records = trefoil_records();
        if let Some(last) = records.last_mut() {
            last.strands = [7, 7, 2, 3];
        }
        let code = assemble(&records, 7);
        assert_eq!(
            code.as_ref().and_then(|pd| pd.tuples().last().copied()),
            Some([1, 7, 2, 3])
        );
    }

    // Tests diagrams with fewer than three crossings are trivial
    #[test]
    fn test_assemble_trivial() {
        let records = trefoil_records();
        assert_eq!(assemble(&[], 1), None);
        assert_eq!(assemble(records.get(..2).unwrap_or_default(), 5), None);
    }

    // Tests label helpers over a known code
    #[test]
    fn test_label_counts() {
        let code = PdCode::new(vec![[1, 5, 2, 4], [2, 5, 3, 6], [3, 1, 4, 6]]);
        assert_eq!(code.len(), 3);
        assert!(!code.is_empty());
        assert_eq!(code.max_label(), 6);
        assert_eq!(code.label_counts(), vec![2; 6]);
        assert_eq!(PdCode::default().max_label(), 0);
        assert!(PdCode::default().label_counts().is_empty());
    }

    // Tests the text form reads back to the same code
    // Verified by dropping the separator between tuples
    #[test]
    fn test_text_form() {
        let code = PdCode::new(vec![[1, 5, 2, 4], [2, 5, 3, 6], [3, 1, 4, 6]]);
        let text = code.to_string();
        assert_eq!(text, "[[1, 5, 2, 4], [2, 5, 3, 6], [3, 1, 4, 6]]");
        assert_eq!(text.parse::<PdCode>(), Ok(code));
        assert_eq!("[]".parse::<PdCode>(), Ok(PdCode::default()));
        assert_eq!(
            "[[1,2,3,4],[4,3,2,1]]".parse::<PdCode>(),
            Ok(PdCode::new(vec![[1, 2, 3, 4], [4, 3, 2, 1]]))
        );
    }

    // Tests malformed text is rejected
    #[test]
    fn test_text_form_errors() {
        assert!("1, 2, 3, 4".parse::<PdCode>().is_err());
        assert!("[[1, 2, 3]]".parse::<PdCode>().is_err());
        assert!("[[1, 2, x, 4]]".parse::<PdCode>().is_err());
        assert!("[1, 2, 3, 4]]".parse::<PdCode>().is_err());
        assert!("[[1, 2, 3, 4],]".parse::<PdCode>().is_err());
    }

    // Tests tuples need their own closing bracket and exactly one separating comma
    // Verified by splitting the text on closing brackets and skipping empty pieces
    #[test]
    fn test_text_form_rejects_broken_separators() {
        assert!("[[1, 2, 3, 4]".parse::<PdCode>().is_err());
        assert!("[[1,2,3,4][5,6,7,8]]".parse::<PdCode>().is_err());
        assert!("[[1,2,3,4],,,[5,6,7,8]]".parse::<PdCode>().is_err());
        assert_eq!(
            "[ [1,2,3,4] ,  [5,6,7,8] ]".parse::<PdCode>(),
            Ok(PdCode::new(vec![[1, 2, 3, 4], [5, 6, 7, 8]]))
        );
    }
}
