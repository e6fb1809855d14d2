//! Pooled vote counting: polygon records applied to an input frame.
use ndarray::Array2;

use crate::chart::PolygonRecord;
use crate::data_handling::Frame;
use crate::error::{ModelError, Result};
use crate::geometry::{Point, Polygon};

/// A record with its axis names resolved to column positions of one frame.
struct ResolvedRecord<'a> {
    x_col: usize,
    y_col: usize,
    class_idx: usize,
    polygon: &'a Polygon,
}

/// Count, per row and per class, how many polygon records contain the row's
/// projection onto the record's axis pair.
///
/// The result has one row per frame row and one column per entry of
/// `classes`, in order; classes no surviving record votes for keep their
/// all-zero column. Axis names are resolved against the frame once, up
/// front, so an unknown feature fails before any row is scanned.
pub fn count_hits(
    records: &[PolygonRecord],
    classes: &[String],
    x: &Frame,
) -> Result<Array2<u32>> {
    let mut resolved = Vec::with_capacity(records.len());
    for record in records {
        let x_col = x
            .column_index(&record.x_axis)
            .ok_or_else(|| ModelError::FeatureNotFound {
                feature: record.x_axis.clone(),
            })?;
        let y_col = x
            .column_index(&record.y_axis)
            .ok_or_else(|| ModelError::FeatureNotFound {
                feature: record.y_axis.clone(),
            })?;
        let class_idx = classes
            .iter()
            .position(|c| c == &record.label)
            .ok_or_else(|| ModelError::UnknownLabel {
                label: record.label.clone(),
            })?;
        resolved.push(ResolvedRecord {
            x_col,
            y_col,
            class_idx,
            polygon: &record.polygon,
        });
    }

    let mut counts = Array2::<u32>::zeros((x.nrows(), classes.len()));
    for record in &resolved {
        for row in 0..x.nrows() {
            let p = Point::new(x.value(row, record.x_col), x.value(row, record.y_col));
            if record.polygon.contains(p) {
                counts[[row, record.class_idx]] += 1;
            }
        }
    }

    log::debug!(
        "Counted votes from {} polygon record(s) over {} row(s) and {} class(es)",
        records.len(),
        x.nrows(),
        classes.len()
    );
    Ok(counts)
}
