use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether a transaction takes money out of or puts money into the account.
///
/// Serialized lowercase (`"expense"` / `"income"`) to match the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

/// A single transaction as returned by `GET /transactions`.
///
/// The backend returns transactions most-recent-first; the client keeps
/// that order and never re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    pub description: String,
    /// Backend auto-categorizes when the user leaves this empty.
    pub category: Option<String>,
    pub transaction_type: TransactionType,
    /// RFC 3339 timestamp.
    pub date: String,
}

/// Envelope for `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
}

/// Spending analysis from `GET /analytics/spending-patterns`.
///
/// Every field defaults: the backend omits all of them when the user has
/// no expense history yet. `category_spending` preserves the key order the
/// backend delivered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendingPatterns {
    #[serde(default)]
    pub total_expenses: f64,
    #[serde(default)]
    pub avg_daily_spending: f64,
    #[serde(default)]
    pub category_spending: IndexMap<String, f64>,
}

/// Per-category expense forecast from `GET /analytics/predictions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    #[serde(default)]
    pub predicted_monthly_expenses: IndexMap<String, f64>,
}

/// A savings goal as returned by `GET /goals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub goal_name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    /// Computed by the backend; may exceed 100 and is stored unclamped.
    pub progress_percentage: f64,
    /// RFC 3339 timestamp, absent for open-ended goals.
    pub target_date: Option<String>,
    pub category: Option<String>,
}

/// Envelope for `GET /goals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalListResponse {
    pub goals: Vec<Goal>,
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub monthly_income: f64,
}

/// Response from both auth endpoints. The backend also sends `user_id` and
/// a human message; only the token matters to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Body for `POST /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: f64,
    pub description: String,
    pub category: Option<String>,
    pub transaction_type: TransactionType,
    /// RFC 3339 timestamp, normalized client-side from the date input.
    pub date: String,
}

/// Body for `POST /goals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub goal_name: String,
    pub target_amount: f64,
    pub target_date: Option<String>,
    pub category: Option<String>,
}

/// Body for `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response from `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Expense).unwrap(),
            "\"expense\""
        );
        assert_eq!(
            serde_json::from_str::<TransactionType>("\"income\"").unwrap(),
            TransactionType::Income
        );
    }

    #[test]
    fn test_transaction_list_deserializes_backend_shape() {
        let body = r#"{
            "transactions": [
                {
                    "id": 3,
                    "amount": 12.5,
                    "description": "lunch",
                    "category": "food",
                    "date": "2024-01-05T00:00:00.000Z",
                    "transaction_type": "expense",
                    "account_name": "main",
                    "created_at": "2024-01-05T10:00:00"
                }
            ]
        }"#;

        let parsed: TransactionListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.transactions.len(), 1);
        assert_eq!(parsed.transactions[0].id, 3);
        assert_eq!(parsed.transactions[0].amount, 12.5);
        assert_eq!(
            parsed.transactions[0].transaction_type,
            TransactionType::Expense
        );
    }

    #[test]
    fn test_spending_patterns_preserve_backend_key_order() {
        let body = r#"{
            "total_expenses": 300.0,
            "avg_daily_spending": 10.0,
            "category_spending": {"food": 120.0, "travel": 100.0, "other": 80.0},
            "spending_behavior": {"food": "moderate_spender"}
        }"#;

        let parsed: SpendingPatterns = serde_json::from_str(body).unwrap();
        let keys: Vec<&str> = parsed.category_spending.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["food", "travel", "other"]);
    }

    #[test]
    fn test_spending_patterns_empty_history_message_only() {
        // Backend sends {"message": "..."} when the user has no expenses.
        let parsed: SpendingPatterns =
            serde_json::from_str(r#"{"message": "No transaction data available"}"#).unwrap();
        assert_eq!(parsed.total_expenses, 0.0);
        assert!(parsed.category_spending.is_empty());
    }

    #[test]
    fn test_goal_with_null_optional_fields() {
        let body = r#"{
            "id": 1,
            "goal_name": "Emergency fund",
            "target_amount": 1000.0,
            "current_amount": 1200.0,
            "target_date": null,
            "category": null,
            "created_at": "2024-01-01T00:00:00",
            "progress_percentage": 120.0
        }"#;

        let goal: Goal = serde_json::from_str(body).unwrap();
        assert_eq!(goal.target_date, None);
        // Over-target progress arrives unclamped and stays unclamped.
        assert_eq!(goal.progress_percentage, 120.0);
    }

    #[test]
    fn test_create_transaction_request_wire_fields() {
        let request = CreateTransactionRequest {
            amount: 42.5,
            description: "coffee".to_string(),
            category: None,
            transaction_type: TransactionType::Expense,
            date: "2024-01-05T00:00:00.000Z".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amount"], 42.5);
        assert_eq!(value["transaction_type"], "expense");
        assert_eq!(value["date"], "2024-01-05T00:00:00.000Z");
        assert!(value["category"].is_null());
    }
}
