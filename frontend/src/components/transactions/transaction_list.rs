use shared::{Transaction, TransactionType};
use yew::prelude::*;

use crate::services::date_utils;

/// Signed display amount and its CSS class, income showing as `+$x`.
pub fn amount_display(transaction: &Transaction) -> (String, &'static str) {
    match transaction.transaction_type {
        TransactionType::Income => (format!("+${}", transaction.amount), "income"),
        TransactionType::Expense => (format!("-${}", transaction.amount), "expense"),
    }
}

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
    /// Show the transaction date next to the category.
    #[prop_or(true)]
    pub show_dates: bool,
}

/// Read-only transaction rows, in the backend's most-recent-first order.
#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    html! {
        <div class="transaction-list">
            {for props.transactions.iter().map(|transaction| {
                let (amount_text, amount_class) = amount_display(transaction);
                html! {
                    <div key={transaction.id} class="transaction-item">
                        <div class="transaction-info">
                            <span class="description">{&transaction.description}</span>
                            <span class="category">
                                {transaction.category.clone().unwrap_or_default()}
                            </span>
                            {if props.show_dates {
                                html! {
                                    <span class="date">
                                        {date_utils::format_display_date(&transaction.date)}
                                    </span>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                        <div class="transaction-amount">
                            <span class={amount_class}>{amount_text}</span>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(transaction_type: TransactionType, amount: f64) -> Transaction {
        Transaction {
            id: 1,
            amount,
            description: "test".to_string(),
            category: None,
            transaction_type,
            date: "2024-01-05T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_amount_display_signs_by_type() {
        let (text, class) = amount_display(&transaction(TransactionType::Income, 12.5));
        assert_eq!(text, "+$12.5");
        assert_eq!(class, "income");

        let (text, class) = amount_display(&transaction(TransactionType::Expense, 42.0));
        assert_eq!(text, "-$42");
        assert_eq!(class, "expense");
    }
}
