use super::*;
use arrow::datatypes::DataType;

#[test]
fn test_schema_creation() {
    let schema = create_trajectory_schema();
    assert_eq!(schema.fields().len(), 5);

    for name in columns::ALL {
        let field = schema.field_with_name(name).unwrap();
        assert_eq!(field.data_type(), &DataType::Float64);
        assert!(!field.is_nullable());
    }
}

#[test]
fn test_column_order() {
    let schema = create_trajectory_schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, vec!["t", "x", "y", "px", "py"]);
}

#[test]
fn test_quantity_metadata() {
    let schema = create_trajectory_schema();
    let px = schema.field_with_name(columns::PX).unwrap();
    assert_eq!(px.metadata().get(FIELD_QUANTITY).unwrap(), "momentum");
    let t = schema.field_with_name(columns::T).unwrap();
    assert_eq!(t.metadata().get(FIELD_QUANTITY).unwrap(), "time");
}

#[test]
fn test_schema_format_version() {
    let schema = create_trajectory_schema();
    assert_eq!(
        schema.metadata().get(KEY_FORMAT_VERSION).unwrap(),
        TRAJPLOT_FORMAT_VERSION
    );
}
