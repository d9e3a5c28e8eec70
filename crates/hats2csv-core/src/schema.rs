// Catalog schema expectations and the output-schema template.

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use std::sync::Arc;

/// Nested light-curve column: one measurement series per object.
pub const LC_COLUMN: &str = "lc";

/// Per-object class label column.
pub const CLASS_COLUMN: &str = "Class";

/// Returns the output schema template for a catalog schema.
///
/// The template is the source schema with a nullable `Class` column
/// appended when the catalog lacks one, so every partition of a job -
/// including empty ones - shares a single output shape. Schema metadata
/// is preserved.
pub fn output_schema(source: &Schema) -> SchemaRef {
    if source.field_with_name(CLASS_COLUMN).is_ok() {
        return Arc::new(source.clone());
    }

    let mut fields: Vec<Field> = source
        .fields()
        .iter()
        .map(|f| f.as_ref().clone())
        .collect();
    fields.push(Field::new(CLASS_COLUMN, DataType::Utf8, true));
    Arc::new(Schema::new_with_metadata(fields, source.metadata().clone()))
}
