//! Tests for the decoding pipeline and its classifications

#[cfg(test)]
mod tests {
    use mosaic_pd::algorithm::assembler::PdCode;
    use mosaic_pd::algorithm::decoder::{Decoding, decode, decode_grid, decode_report};
    use mosaic_pd::algorithm::tracer::Termination;
    use mosaic_pd::spatial::grid::{MosaicGrid, Position};
    use mosaic_pd::spatial::tiles::Face;
    use mosaic_pd::MosaicError;

    const TREFOIL: &str = "0021002a91063940354000000";

    fn knot(tuples: &[[u32; 4]]) -> Decoding {
        Decoding::Knot(PdCode::new(tuples.to_vec()))
    }

    // Tests the reference trefoil decodes to its PD code
    // Verified by rotating every tuple the same way
    #[test]
    fn test_trefoil() {
        assert_eq!(
            decode(TREFOIL),
            Ok(knot(&[[1, 5, 2, 4], [2, 5, 3, 6], [3, 1, 4, 6]]))
        );
    }

    // Tests a second trefoil embedding with a different discovery order
    #[test]
    fn test_trefoil_other_embedding() {
        assert_eq!(
            decode("2512135a84003a10259403540"),
            Ok(knot(&[[4, 4, 5, 3], [2, 6, 3, 5], [6, 2, 1, 1]]))
        );
    }

    // Tests wrap-around diagrams whose crossings all live on the rear layer
    #[test]
    fn test_rear_only_knot() {
        assert_eq!(
            decode("4312"),
            Ok(knot(&[[2, 4, 3, 3], [5, 4, 6, 5], [6, 8, 7, 7], [1, 8, 2, 1]]))
        );
    }

    // Tests closed loops without enough crossings are unknots
    #[test]
    fn test_unknots() {
        for mosaic in ["210340000", "2134", "5", "6", "7", "8", "0000000021003400"] {
            assert_eq!(decode(mosaic), Ok(Decoding::Unknot), "{mosaic}");
        }
    }

    // Tests open strands, missed tiles and separate loops are not knots
    // Verified by judging closure on the rear layer as well
    #[test]
    fn test_not_knots() {
        for mosaic in [
            "9",
            "a",
            "5555",
            "2121343400000000",
            "0210",
            "4300",
            "2a13",
            "1",
            "500000000",
            "400000000",
        ] {
            assert_eq!(decode(mosaic), Ok(Decoding::NotAKnot), "{mosaic}");
        }
    }

    // Tests malformed and blank mosaics surface as errors
    #[test]
    fn test_errors() {
        assert_eq!(decode(""), Err(MosaicError::EmptyMosaic));
        assert_eq!(decode("43"), Err(MosaicError::NotSquare { length: 2 }));
        assert_eq!(decode("21340000"), Err(MosaicError::NotSquare { length: 8 }));
        assert_eq!(decode("0000"), Err(MosaicError::NoStrand { size: 2 }));
        assert_eq!(decode("000000000"), Err(MosaicError::NoStrand { size: 3 }));
        assert!(matches!(
            decode("213g"),
            Err(MosaicError::InvalidTile { position: 3, character: 'g' })
        ));
    }

    // Tests reports carry trace statistics alongside the classification
    #[test]
    fn test_reports() {
        let report = decode_report(TREFOIL).unwrap_or_else(|error| unreachable!("{error}"));
        assert_eq!(report.termination, Termination::Closed);
        assert_eq!(report.satisfied_crossings, 3);
        assert_eq!(report.strands_assigned, 7);
        assert_eq!(report.steps, 16);

        let report = decode_report("0210").unwrap_or_else(|error| unreachable!("{error}"));
        assert_eq!(report.decoding, Decoding::NotAKnot);
        assert_eq!(
            report.termination,
            Termination::DeadEnd {
                position: Position::front(3),
                heading: Face::Down,
            }
        );

        let report = decode_report("2121343400000000").unwrap_or_else(|error| unreachable!("{error}"));
        assert_eq!(report.termination, Termination::Closed);
        assert_eq!(report.steps, 4);
    }

    // Tests decoding a prebuilt grid matches decoding its string
    #[test]
    fn test_decode_grid() {
        let grid = MosaicGrid::parse(TREFOIL).unwrap_or_else(|error| unreachable!("{error}"));
        let report = decode_grid(&grid).unwrap_or_else(|error| unreachable!("{error}"));
        assert_eq!(Ok(report.decoding), decode(TREFOIL));
    }

    // Tests classification labels and display forms
    #[test]
    fn test_display() {
        assert_eq!(Decoding::Unknot.to_string(), "unknot");
        assert_eq!(Decoding::NotAKnot.to_string(), "not a knot");
        assert_eq!(
            knot(&[[1, 5, 2, 4], [2, 5, 3, 6], [3, 1, 4, 6]]).to_string(),
            "knot [[1, 5, 2, 4], [2, 5, 3, 6], [3, 1, 4, 6]]"
        );
        assert!(Decoding::Unknot.is_closed_diagram());
        assert!(!Decoding::NotAKnot.is_closed_diagram());
        assert_eq!(Decoding::Unknot.pd_code(), None);
    }

    // Tests decoding twice yields identical results
    #[test]
    fn test_idempotent() {
        for mosaic in [TREFOIL, "4312", "0210", "2134"] {
            assert_eq!(decode(mosaic), decode(mosaic));
        }
    }
}
