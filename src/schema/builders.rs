use std::collections::HashMap;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaBuilder};

use super::columns;
use super::constants::{FIELD_QUANTITY, KEY_FORMAT_VERSION, TRAJPLOT_FORMAT_VERSION};

/// Creates a Float64 field annotated with its physical quantity
fn quantity_field(name: &str, quantity: &str) -> Field {
    let mut metadata = HashMap::new();
    metadata.insert(FIELD_QUANTITY.to_string(), quantity.to_string());
    Field::new(name, DataType::Float64, false).with_metadata(metadata)
}

/// Creates the Arrow schema for a trajectory table.
///
/// # Example
///
/// ```
/// use trajplot::schema::create_trajectory_schema;
///
/// let schema = create_trajectory_schema();
/// assert_eq!(schema.fields().len(), 5);
/// ```
pub fn create_trajectory_schema() -> Schema {
    let mut builder = SchemaBuilder::new();

    builder.push(quantity_field(columns::T, "time"));
    builder.push(quantity_field(columns::X, "position"));
    builder.push(quantity_field(columns::Y, "position"));
    builder.push(quantity_field(columns::PX, "momentum"));
    builder.push(quantity_field(columns::PY, "momentum"));

    let mut schema_metadata = HashMap::new();
    schema_metadata.insert(
        KEY_FORMAT_VERSION.to_string(),
        TRAJPLOT_FORMAT_VERSION.to_string(),
    );

    builder.finish().with_metadata(schema_metadata)
}

/// Creates the trajectory schema wrapped in an Arc
pub fn create_trajectory_schema_arc() -> Arc<Schema> {
    Arc::new(create_trajectory_schema())
}
