//! Adapter layer: the hooks and probe registered with the host runtime.

pub mod basic;
