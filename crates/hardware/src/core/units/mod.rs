//! Execution units and functional components.
//!
//! The Turtle16 datapath has a single functional unit: the IDT7381 ALU used by
//! the Execute stage for arithmetic, logic, address generation, and branch
//! target computation.

/// Arithmetic Logic Unit (IDT7381 model).
pub mod alu;
