//! Builders for test inputs.


pub use instruction::InstructionBuilder;
