use std::{
    env::temp_dir,
    path::{Path, PathBuf},
};

use rand::distr::{Alphanumeric, SampleString};
use serde_json::Value;

/// Unique extension-less destination stub under the system temp dir.
pub fn temp_stub(prefix: &str) -> PathBuf {
    let suffix = Alphanumeric.sample_string(&mut rand::rng(), 12);
    temp_dir().join(format!("{prefix}_{suffix}"))
}

/// The `.csv` file a serializer derives from a destination stub.
pub fn csv_path(stub: &Path) -> PathBuf {
    let mut path = stub.as_os_str().to_os_string();
    path.push(".csv");
    PathBuf::from(path)
}

/// Builds an ordered record from a `json!` object literal.
pub fn record(value: Value) -> serde_json::Map<String, Value> {
    value.as_object().expect("object literal").clone()
}
