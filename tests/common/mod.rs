//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::Once;

use opsel::{BuiltinType, DataType, TypeCategory};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route `tracing` output to the test writer, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn ty(builtin: BuiltinType) -> DataType {
    DataType::builtin(builtin)
}

pub fn nullable(builtin: BuiltinType) -> DataType {
    DataType::nullable_builtin(builtin)
}

/// Every type the fast-path tables have a row for.
pub fn all_categories() -> Vec<DataType> {
    TypeCategory::all().map(TypeCategory::data_type).collect()
}
