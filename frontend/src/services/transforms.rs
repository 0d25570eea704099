//! Chart-ready views over the raw model slices.
//!
//! These are pure and cheap (bounded by the category count), so they are
//! recomputed from current state on every render rather than cached.

use shared::{Predictions, SpendingPatterns};

/// One slice of the spending-by-category chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
}

/// One bar group of the current-vs-predicted chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryComparison {
    pub category: String,
    pub predicted: f64,
    pub current: f64,
}

/// One record per `category_spending` key, amounts untouched, in the order
/// the backend delivered the mapping.
pub fn category_breakdown(patterns: &SpendingPatterns) -> Vec<CategorySlice> {
    patterns
        .category_spending
        .iter()
        .map(|(category, amount)| CategorySlice {
            category: category.clone(),
            amount: *amount,
        })
        .collect()
}

/// Join predicted against current spending per category, iterating the
/// predicted keys. A category with no current spending compares against
/// zero, not an error.
pub fn current_vs_predicted(
    predictions: &Predictions,
    patterns: &SpendingPatterns,
) -> Vec<CategoryComparison> {
    predictions
        .predicted_monthly_expenses
        .iter()
        .map(|(category, predicted)| CategoryComparison {
            category: category.clone(),
            predicted: *predicted,
            current: patterns
                .category_spending
                .get(category)
                .copied()
                .unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn patterns_with(entries: &[(&str, f64)]) -> SpendingPatterns {
        let mut category_spending = IndexMap::new();
        for (category, amount) in entries {
            category_spending.insert(category.to_string(), *amount);
        }
        SpendingPatterns {
            total_expenses: entries.iter().map(|(_, a)| a).sum(),
            avg_daily_spending: 0.0,
            category_spending,
        }
    }

    fn predictions_with(entries: &[(&str, f64)]) -> Predictions {
        let mut predicted_monthly_expenses = IndexMap::new();
        for (category, amount) in entries {
            predicted_monthly_expenses.insert(category.to_string(), *amount);
        }
        Predictions {
            predicted_monthly_expenses,
        }
    }

    #[test]
    fn test_breakdown_one_record_per_key_amounts_exact() {
        let patterns = patterns_with(&[("food", 120.5), ("travel", 80.0), ("rent", 950.25)]);

        let breakdown = category_breakdown(&patterns);

        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].category, "food");
        assert_eq!(breakdown[0].amount, 120.5);
        assert_eq!(breakdown[1].category, "travel");
        assert_eq!(breakdown[1].amount, 80.0);
        assert_eq!(breakdown[2].category, "rent");
        assert_eq!(breakdown[2].amount, 950.25);
    }

    #[test]
    fn test_breakdown_of_empty_patterns_is_empty() {
        assert!(category_breakdown(&SpendingPatterns::default()).is_empty());
    }

    #[test]
    fn test_comparison_defaults_missing_current_to_zero() {
        let predictions = predictions_with(&[("travel", 200.0)]);
        let patterns = SpendingPatterns::default();

        let rows = current_vs_predicted(&predictions, &patterns);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "travel");
        assert_eq!(rows[0].predicted, 200.0);
        assert_eq!(rows[0].current, 0.0);
    }

    #[test]
    fn test_comparison_iterates_predicted_keys() {
        let predictions = predictions_with(&[("food", 150.0), ("travel", 200.0)]);
        // "rent" is only in current spending; it must not appear.
        let patterns = patterns_with(&[("travel", 42.0), ("rent", 900.0)]);

        let rows = current_vs_predicted(&predictions, &patterns);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "food");
        assert_eq!(rows[0].current, 0.0);
        assert_eq!(rows[1].category, "travel");
        assert_eq!(rows[1].current, 42.0);
    }
}
