//! JSON record export.

use serde::Serialize;

/// Serializes rows as a JSON array of flat records.
///
/// # Examples
///
/// ```
/// use u_tolling::export::to_json_records;
/// use u_tolling::models::DistanceRow;
///
/// let json = to_json_records(&[DistanceRow::new(1, 2, 5.0)]).unwrap();
/// assert_eq!(json, r#"[{"id_start":1,"id_end":2,"distance":5.0}]"#);
/// ```
pub fn to_json_records<T: Serialize>(rows: &[T]) -> serde_json::Result<String> {
    serde_json::to_string(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DistanceRow, RatedRow, VehicleClass};

    #[test]
    fn test_rated_columns() {
        let rated = RatedRow::from_distance_row(&DistanceRow::new(1, 3, 25.0));
        let json = to_json_records(&[rated]).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let record = &value[0];
        for column in ["id_start", "id_end", "distance"] {
            assert!(record.get(column).is_some(), "missing {column}");
        }
        for class in VehicleClass::ALL {
            let cell = record.get(class.column()).and_then(|v| v.as_f64());
            assert_eq!(cell, Some(rated.rates.get(class)), "{}", class.column());
        }
        assert_eq!(record["truck"], 90.0);
    }
}
