/// trajplot footer metadata version - follows semantic versioning
pub const TRAJPLOT_FORMAT_VERSION: &str = "1.0.0";

/// Metadata key for format version in Parquet footer
pub const KEY_FORMAT_VERSION: &str = "trajplot:format_version";

/// Metadata key for the file creation timestamp (RFC 3339)
pub const KEY_CREATED: &str = "trajplot:created";

/// Metadata key for the integration method or run name that produced the data
pub const KEY_METHOD: &str = "trajplot:method";

/// Field metadata key naming the physical quantity of a column
pub const FIELD_QUANTITY: &str = "quantity";
