//! Per-service label schema.
//!
//! One static ordered table drives both the label-name list attached to every
//! metric and the label-value list attached to every emitted sample.
//! [`names`] and [`values`] iterate that same table, so positions always stay
//! aligned; changing the schema means editing `SERVICE_LABELS` and nothing
//! else.

use crate::client::ServiceRecord;

/// One exported label: its name and how to derive its value from a record.
pub struct LabelDescriptor {
    pub name: &'static str,
    pub extract: fn(&ServiceRecord) -> String,
}

/// The ordered label schema. Order is significant and shared between metric
/// declaration and sample emission.
pub static SERVICE_LABELS: [LabelDescriptor; 6] = [
    LabelDescriptor {
        name: "service_name",
        extract: |record| record.name.clone(),
    },
    LabelDescriptor {
        name: "repository",
        extract: |record| record.repository.clone(),
    },
    LabelDescriptor {
        name: "type",
        extract: |record| record.service_type.clone(),
    },
    LabelDescriptor {
        name: "ml_type",
        extract: |record| record.ml_type.clone(),
    },
    LabelDescriptor {
        name: "service_description",
        extract: |record| record.description.clone(),
    },
    LabelDescriptor {
        // Booleans render as "1"/"0", not "true"/"false".
        name: "predict",
        extract: |record| if record.predict { "1" } else { "0" }.to_string(),
    },
];

/// Label names, in schema order.
pub fn names() -> Vec<&'static str> {
    SERVICE_LABELS.iter().map(|label| label.name).collect()
}

/// Label values for `record`, in the same schema order as [`names`].
pub fn values(record: &ServiceRecord) -> Vec<String> {
    SERVICE_LABELS
        .iter()
        .map(|label| (label.extract)(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ServiceRecord {
        ServiceRecord {
            name: "imagenet".to_string(),
            description: "image classifier".to_string(),
            repository: "/models/imagenet".to_string(),
            service_type: "supervised".to_string(),
            ml_type: "caffe".to_string(),
            predict: true,
            ..Default::default()
        }
    }

    #[test]
    fn names_and_values_stay_aligned() {
        let record = sample_record();
        assert_eq!(names().len(), values(&record).len());
        assert_eq!(names().len(), values(&ServiceRecord::default()).len());
    }

    #[test]
    fn values_follow_declared_order() {
        let record = sample_record();
        assert_eq!(
            names(),
            vec![
                "service_name",
                "repository",
                "type",
                "ml_type",
                "service_description",
                "predict",
            ]
        );
        assert_eq!(
            values(&record),
            vec![
                "imagenet",
                "/models/imagenet",
                "supervised",
                "caffe",
                "image classifier",
                "1",
            ]
        );
    }

    #[test]
    fn predict_renders_as_zero_or_one() {
        let mut record = sample_record();
        assert_eq!(values(&record)[5], "1");
        record.predict = false;
        assert_eq!(values(&record)[5], "0");
    }
}
