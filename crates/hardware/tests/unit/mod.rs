//! # Unit Components
//!
//! This module serves as the central hub for the unit tests of the simulator.
//! It organizes tests for the configuration layer, the processor core, the ISA
//! definitions, the system components, and the statistics counters.




/// Unit tests for RAM, the callback bus, and the assembled computer.
pub mod soc;
