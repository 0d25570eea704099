//! Form state and validation for the two mutation handlers.
//!
//! Validation is pure and runs before any network call: a form that fails
//! here never produces a request.

use shared::{CreateGoalRequest, CreateTransactionRequest, TransactionType};
use thiserror::Error;

use crate::services::date_utils;

/// A client-side validation failure. Blocks submission; nothing is sent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
}

fn parse_amount(input: &str) -> Result<f64, FormError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| FormError::InvalidAmount(input.to_string()))
}

fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Raw text of the add-transaction form, exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub amount: String,
    pub description: String,
    pub category: String,
    pub transaction_type: TransactionType,
    pub date: String,
}

impl TransactionForm {
    /// Empty defaults: expense type, date prefilled with today.
    pub fn empty() -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            category: String::new(),
            transaction_type: TransactionType::Expense,
            date: date_utils::current_date_input(),
        }
    }

    /// Check required fields, parse the amount, and normalize the date to
    /// an absolute timestamp. Category is optional; empty means "let the
    /// backend auto-categorize".
    pub fn validate(&self) -> Result<CreateTransactionRequest, FormError> {
        if self.amount.trim().is_empty() {
            return Err(FormError::MissingField("amount"));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::MissingField("description"));
        }

        let amount = parse_amount(&self.amount)?;
        let date = date_utils::normalize_date_input(self.date.trim())
            .ok_or_else(|| FormError::InvalidDate(self.date.clone()))?;

        Ok(CreateTransactionRequest {
            amount,
            description: self.description.trim().to_string(),
            category: optional_text(&self.category),
            transaction_type: self.transaction_type,
            date,
        })
    }
}

/// Raw text of the create-goal form.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalForm {
    pub goal_name: String,
    pub target_amount: String,
    pub target_date: String,
    pub category: String,
}

impl GoalForm {
    pub fn empty() -> Self {
        Self {
            goal_name: String::new(),
            target_amount: String::new(),
            target_date: String::new(),
            category: String::new(),
        }
    }

    /// Goal name and target amount are required; the target date is
    /// optional but must be a real date when present.
    pub fn validate(&self) -> Result<CreateGoalRequest, FormError> {
        if self.goal_name.trim().is_empty() {
            return Err(FormError::MissingField("goal name"));
        }
        if self.target_amount.trim().is_empty() {
            return Err(FormError::MissingField("target amount"));
        }

        let target_amount = parse_amount(&self.target_amount)?;

        let target_date = match self.target_date.trim() {
            "" => None,
            raw => Some(
                date_utils::normalize_date_input(raw)
                    .ok_or_else(|| FormError::InvalidDate(raw.to_string()))?,
            ),
        };

        Ok(CreateGoalRequest {
            goal_name: self.goal_name.trim().to_string(),
            target_amount,
            target_date,
            category: optional_text(&self.category),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_transaction_form() -> TransactionForm {
        TransactionForm {
            amount: "42.50".to_string(),
            description: "coffee".to_string(),
            category: String::new(),
            transaction_type: TransactionType::Expense,
            date: "2024-01-05".to_string(),
        }
    }

    #[test]
    fn test_transaction_form_valid_input_builds_request() {
        let request = filled_transaction_form().validate().unwrap();

        assert_eq!(request.amount, 42.5);
        assert_eq!(request.description, "coffee");
        assert_eq!(request.category, None);
        assert_eq!(request.transaction_type, TransactionType::Expense);
        assert_eq!(request.date, "2024-01-05T00:00:00.000Z");
    }

    #[test]
    fn test_transaction_form_empty_description_blocks_submission() {
        let mut form = filled_transaction_form();
        form.description = "   ".to_string();

        assert_eq!(
            form.validate(),
            Err(FormError::MissingField("description"))
        );
    }

    #[test]
    fn test_transaction_form_empty_amount_blocks_submission() {
        let mut form = filled_transaction_form();
        form.amount = String::new();

        assert_eq!(form.validate(), Err(FormError::MissingField("amount")));
    }

    #[test]
    fn test_transaction_form_rejects_non_numeric_amount() {
        let mut form = filled_transaction_form();
        form.amount = "a lot".to_string();
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidAmount("a lot".to_string()))
        );

        // "NaN" parses as a float but is not a usable amount.
        form.amount = "NaN".to_string();
        assert!(matches!(form.validate(), Err(FormError::InvalidAmount(_))));
    }

    #[test]
    fn test_transaction_form_rejects_invalid_date() {
        let mut form = filled_transaction_form();
        form.date = "2024-02-30".to_string();

        assert!(matches!(form.validate(), Err(FormError::InvalidDate(_))));
    }

    #[test]
    fn test_transaction_form_keeps_category_when_given() {
        let mut form = filled_transaction_form();
        form.category = " groceries ".to_string();

        let request = form.validate().unwrap();
        assert_eq!(request.category.as_deref(), Some("groceries"));
    }

    #[test]
    fn test_goal_form_requires_name_and_target() {
        let form = GoalForm {
            goal_name: String::new(),
            target_amount: "100".to_string(),
            target_date: String::new(),
            category: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("goal name")));

        let form = GoalForm {
            goal_name: "Vacation".to_string(),
            target_amount: "  ".to_string(),
            target_date: String::new(),
            category: String::new(),
        };
        assert_eq!(
            form.validate(),
            Err(FormError::MissingField("target amount"))
        );
    }

    #[test]
    fn test_goal_form_optional_date_normalized_when_present() {
        let mut form = GoalForm {
            goal_name: "Vacation".to_string(),
            target_amount: "1500".to_string(),
            target_date: String::new(),
            category: "travel".to_string(),
        };

        let request = form.validate().unwrap();
        assert_eq!(request.target_amount, 1500.0);
        assert_eq!(request.target_date, None);
        assert_eq!(request.category.as_deref(), Some("travel"));

        form.target_date = "2025-06-01".to_string();
        let request = form.validate().unwrap();
        assert_eq!(
            request.target_date.as_deref(),
            Some("2025-06-01T00:00:00.000Z")
        );
    }
}
