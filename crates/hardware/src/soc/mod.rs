//! System Components.
//!
//! This module organizes the components around the CPU core: the data bus
//! seen by the MEM stage, its implementations, and the assembled computer.

/// Computer assembly, reset types, and snapshots.
pub mod builder;

/// Closure-backed data bus.
pub mod interconnect;

/// Data RAM with the bank select register.
pub mod memory;

/// Data bus trait.
pub mod traits;

pub use builder::{Computer, ResetType};
pub use interconnect::CallbackBus;
pub use memory::Ram;
pub use traits::DataBus;
