//! System component tests.
