//! Light-curve normalization and label application.

use std::sync::Arc;

use arrow::array::{ArrayRef, RecordBatch, StringArray};
use arrow::compute::{self, filter_record_batch};
use arrow::datatypes::{DataType, FieldRef, Schema};

use crate::error::TransformError;
use crate::label::LabelSource;
use crate::schema::{output_schema, LC_COLUMN};

/// Normalize the light-curve column into the nested `List` representation
/// and drop every row whose light-curve value is null.
///
/// Catalog writers sometimes encode the measurement series as a
/// `LargeList`; those are cast down to `List` so downstream consumers see
/// one shape. Any non-list type is rejected - a malformed light-curve
/// column is never repaired row by row.
pub fn normalize_light_curve(batch: &RecordBatch) -> Result<RecordBatch, TransformError> {
    let index = batch
        .schema()
        .index_of(LC_COLUMN)
        .map_err(|_| TransformError::MissingColumn { name: LC_COLUMN })?;

    let lc = batch.column(index);
    let lc: ArrayRef = match lc.data_type() {
        DataType::List(_) => Arc::clone(lc),
        DataType::LargeList(field) => compute::cast(lc, &DataType::List(Arc::clone(field)))?,
        other => {
            return Err(TransformError::UnsupportedLightCurve {
                datatype: other.clone(),
            })
        }
    };

    let mut fields: Vec<FieldRef> = batch.schema().fields().iter().cloned().collect();
    if fields[index].data_type() != lc.data_type() {
        fields[index] = Arc::new(
            fields[index]
                .as_ref()
                .clone()
                .with_data_type(lc.data_type().clone()),
        );
    }
    let schema = Arc::new(Schema::new_with_metadata(
        fields,
        batch.schema().metadata().clone(),
    ));

    let mut columns = batch.columns().to_vec();
    columns[index] = Arc::clone(&lc);
    let batch = RecordBatch::try_new(schema, columns)?;

    let keep = compute::is_not_null(&lc)?;
    Ok(filter_record_batch(&batch, &keep)?)
}

/// Populate the `Class` column according to the resolved label source.
///
/// For [`LabelSource::Column`] the batch already carries its labels and
/// is returned as-is. For [`LabelSource::Global`] a constant `Class`
/// column is appended under the output-schema template.
pub fn apply_label(batch: RecordBatch, source: &LabelSource) -> Result<RecordBatch, TransformError> {
    match source {
        LabelSource::Column => Ok(batch),
        LabelSource::Global(label) => {
            let schema = output_schema(&batch.schema());
            let class: ArrayRef = Arc::new(StringArray::from(vec![
                label.as_str();
                batch.num_rows()
            ]));
            let mut columns = batch.columns().to_vec();
            columns.push(class);
            Ok(RecordBatch::try_new(schema, columns)?)
        }
    }
}
