//! Analysis of decoded mosaic batches

/// Outcome tallies for batches of decoded mosaics
pub mod statistics;
