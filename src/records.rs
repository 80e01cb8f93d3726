//! Ordered feature rows and the two missing-value policies used by the derivers.
//!
//! The style vector feeds clustering models fitted on NaN-propagated ratios, while
//! the player models were fitted on zero-filled ratios. Both policies live here so
//! each deriver picks its own explicitly.

use serde::{Deserialize, Serialize};

/// `numerator / denominator`, or NaN when the denominator is zero.
pub fn ratio_or_nan(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return f64::NAN;
    }
    numerator / denominator
}

/// `numerator / denominator`, with any non-finite outcome replaced by zero.
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    zero_if_not_finite(numerator / denominator)
}

pub fn zero_if_not_finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// One record as ordered `(column, value)` pairs. Column order is part of the
/// contract with downstream models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    columns: Vec<(String, f64)>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Appends a column, replacing the value in place if the name already exists.
    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        if let Some(slot) = self.columns.iter_mut().find(|(col, _)| *col == name) {
            slot.1 = value;
            return;
        }
        self.columns.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> Vec<f64> {
        self.columns.iter().map(|(_, value)| *value).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for FeatureRow {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut row = FeatureRow::new();
        for (name, value) in iter {
            row.push(name, value);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_policies_diverge_on_zero_denominator() {
        assert!(ratio_or_nan(3.0, 0.0).is_nan());
        assert!(ratio_or_nan(0.0, 0.0).is_nan());
        assert_eq!(ratio_or_zero(3.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(0.0, 0.0), 0.0);
        assert_eq!(ratio_or_nan(3.0, 2.0), 1.5);
        assert_eq!(ratio_or_zero(3.0, 2.0), 1.5);
    }

    #[test]
    fn feature_row_keeps_insertion_order() {
        let row: FeatureRow = [("b", 2.0), ("a", 1.0), ("c", 3.0)].into_iter().collect();
        assert_eq!(row.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(row.values(), vec![2.0, 1.0, 3.0]);
        assert_eq!(row.get("a"), Some(1.0));
        assert_eq!(row.get("z"), None);
    }

    #[test]
    fn feature_row_push_overwrites_existing_column() {
        let mut row = FeatureRow::new();
        row.push("x", 1.0);
        row.push("y", 2.0);
        row.push("x", 5.0);
        assert_eq!(row.len(), 2);
        assert_eq!(row.values(), vec![5.0, 2.0]);
    }
}
