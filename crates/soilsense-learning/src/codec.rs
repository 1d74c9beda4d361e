//! Bidirectional mapping between crop names and integer class ids.

use crate::error::{LearningError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maps crop name strings to the dense integer ids the classifier trains on,
/// and back.
///
/// Ids are assigned by lexicographic order of the distinct labels, so the
/// mapping is deterministic for a given training population and stable for
/// the lifetime of the trained model it is bundled with. The mapping is a
/// bijection between the fitted label set and `[0, k)`.
///
/// # Example
///
/// ```
/// use soilsense_learning::LabelCodec;
///
/// let codec = LabelCodec::fit(["wheat", "rice", "wheat"]).unwrap();
/// assert_eq!(codec.len(), 2);
/// assert_eq!(codec.encode("rice").unwrap(), 0);
/// assert_eq!(codec.decode(1).unwrap(), "wheat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCodec {
    classes: Vec<String>,
}

impl LabelCodec {
    /// Build a codec from the labels observed in training data.
    ///
    /// Duplicates collapse; the distinct labels are sorted and numbered
    /// `0..k` in that order.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::InvalidInput`] if no labels are provided.
    pub fn fit<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: Vec<String> = labels
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if classes.is_empty() {
            return Err(LearningError::InvalidInput(
                "cannot fit a label codec on an empty label set".to_string(),
            ));
        }

        Ok(Self { classes })
    }

    /// Encode a crop name to its class id.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::UnknownLabel`] if the label was not part of
    /// the fitted set.
    pub fn encode(&self, label: &str) -> Result<u32> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(label))
            .map(|i| i as u32)
            .map_err(|_| LearningError::UnknownLabel(label.to_string()))
    }

    /// Decode a class id back to its crop name.
    ///
    /// # Errors
    ///
    /// Returns [`LearningError::UnknownId`] if `id` is outside `[0, k)`.
    pub fn decode(&self, id: u32) -> Result<&str> {
        self.classes
            .get(id as usize)
            .map(|s| s.as_str())
            .ok_or(LearningError::UnknownId {
                id,
                classes: self.classes.len() as u32,
            })
    }

    /// The fitted crop names, in id order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of distinct fitted labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the codec holds no classes. Never true for a fitted codec.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_assigns_sorted_ids() {
        let codec = LabelCodec::fit(["wheat", "maize", "rice"]).unwrap();
        assert_eq!(codec.encode("maize").unwrap(), 0);
        assert_eq!(codec.encode("rice").unwrap(), 1);
        assert_eq!(codec.encode("wheat").unwrap(), 2);
    }

    #[test]
    fn test_fit_collapses_duplicates() {
        let codec = LabelCodec::fit(["rice", "rice", "wheat", "rice"]).unwrap();
        assert_eq!(codec.len(), 2);
    }

    #[test]
    fn test_fit_is_deterministic_across_input_orders() {
        let a = LabelCodec::fit(["wheat", "rice", "maize"]).unwrap();
        let b = LabelCodec::fit(["maize", "wheat", "rice"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_trip_every_fitted_label() {
        let labels = ["rice", "wheat", "maize", "cotton", "jute"];
        let codec = LabelCodec::fit(labels).unwrap();

        for label in labels {
            let id = codec.encode(label).unwrap();
            assert_eq!(codec.decode(id).unwrap(), label);
        }
    }

    #[test]
    fn test_encode_unknown_label_fails() {
        let codec = LabelCodec::fit(["rice", "wheat"]).unwrap();
        assert!(matches!(
            codec.encode("banana"),
            Err(LearningError::UnknownLabel(label)) if label == "banana"
        ));
    }

    #[test]
    fn test_decode_out_of_range_id_fails() {
        let codec = LabelCodec::fit(["rice", "wheat"]).unwrap();
        assert!(matches!(
            codec.decode(2),
            Err(LearningError::UnknownId { id: 2, classes: 2 })
        ));
    }

    #[test]
    fn test_fit_empty_fails() {
        let labels: [&str; 0] = [];
        assert!(matches!(
            LabelCodec::fit(labels),
            Err(LearningError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_serialization_round_trip() {
        let codec = LabelCodec::fit(["rice", "wheat"]).unwrap();
        let json = serde_json::to_string(&codec).unwrap();
        let restored: LabelCodec = serde_json::from_str(&json).unwrap();
        assert_eq!(codec, restored);
    }
}
