//! Decoding constants and batch runtime defaults

// Rear layer derivation
/// Code offset applied to a rear row whose front row reaches the left edge
pub const ROW_WRAP_OFFSET: u8 = 5;
/// Code offset applied to a rear column whose front column reaches the top edge
pub const COLUMN_WRAP_OFFSET: u8 = 6;

/// Fewest crossings a diagram needs before it can be knotted
pub const MIN_KNOTTED_CROSSINGS: usize = 3;

// Result file format
/// Final line of a completely written result file
pub const END_RESULT_SENTINEL: &str = "END_RESULT";
/// Separator between the fields of a result record
pub const RECORD_SEPARATOR: &str = " || ";
/// Suffix added to input file stems for their result files
pub const OUTPUT_SUFFIX: &str = "_pd";
/// Extension of mosaic list files picked up from a directory
pub const INPUT_EXTENSION: &str = "txt";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
