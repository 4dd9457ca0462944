//! Unit tests mirroring the source tree, one file per source file

mod algorithm;
