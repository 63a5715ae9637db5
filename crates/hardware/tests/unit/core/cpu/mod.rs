//! CPU driver tests.


/// Single instructions through the whole pipeline.
pub mod instructions;
