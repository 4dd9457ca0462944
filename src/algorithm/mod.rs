/// Crossing records and PD code assembly
pub mod assembler;
/// Traced-connection ledger and satisfied flags
pub mod connections;
/// Decoding pipeline and classification
pub mod decoder;
/// Finite-state strand walk over the mosaic grid
pub mod tracer;
