// Adapters layer: concrete implementations for external systems.
// The filesystem backend lives in config::cli next to the CLI configuration.

pub mod memory;
