use std::rc::Rc;

use shared::{Goal, Predictions, SpendingPatterns, Transaction};
use yew::prelude::*;

/// Which main panel is showing. No history stack; switching tabs never
/// triggers a fetch because all data already lives in the synced model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Dashboard,
    Transactions,
    Goals,
    Chat,
}

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the append-only conversation log. Client-only; never sent
/// to or read from the backend, cleared on logout.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

/// The whole client model. Every mutation goes through [`Action`] so the
/// transitions stay testable without a rendering harness.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Bumped on every login and logout. Async results carry the epoch
    /// they were issued under; the reducer drops mismatches so a response
    /// landing after logout can never repopulate a cleared slice.
    pub session_epoch: u32,
    pub token: Option<String>,
    pub transactions: Vec<Transaction>,
    pub spending_patterns: SpendingPatterns,
    pub predictions: Predictions,
    pub goals: Vec<Goal>,
    pub chat_messages: Vec<ChatMessage>,
    pub active_tab: ActiveTab,
}

impl AppState {
    pub fn new(token: Option<String>) -> Self {
        Self {
            session_epoch: 0,
            token,
            transactions: Vec::new(),
            spending_patterns: SpendingPatterns::default(),
            predictions: Predictions::default(),
            goals: Vec::new(),
            chat_messages: Vec::new(),
            active_tab: ActiveTab::Dashboard,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Named mutation entry points for [`AppState`].
///
/// The `*Loaded` and `AssistantMessageAppended` variants carry the session
/// epoch current when their request was issued.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoggedIn(String),
    LoggedOut,
    TabSelected(ActiveTab),
    TransactionsLoaded {
        epoch: u32,
        transactions: Vec<Transaction>,
    },
    SpendingPatternsLoaded {
        epoch: u32,
        patterns: SpendingPatterns,
    },
    PredictionsLoaded {
        epoch: u32,
        predictions: Predictions,
    },
    GoalsLoaded {
        epoch: u32,
        goals: Vec<Goal>,
    },
    UserMessageAppended(String),
    AssistantMessageAppended {
        epoch: u32,
        text: String,
    },
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            Action::LoggedIn(token) => {
                next = AppState::new(Some(token));
                next.session_epoch = self.session_epoch + 1;
            }
            Action::LoggedOut => {
                next = AppState::new(None);
                next.session_epoch = self.session_epoch + 1;
            }
            Action::TabSelected(tab) => {
                next.active_tab = tab;
            }
            Action::TransactionsLoaded {
                epoch,
                transactions,
            } => {
                if epoch == next.session_epoch {
                    next.transactions = transactions;
                }
            }
            Action::SpendingPatternsLoaded { epoch, patterns } => {
                if epoch == next.session_epoch {
                    next.spending_patterns = patterns;
                }
            }
            Action::PredictionsLoaded { epoch, predictions } => {
                if epoch == next.session_epoch {
                    next.predictions = predictions;
                }
            }
            Action::GoalsLoaded { epoch, goals } => {
                if epoch == next.session_epoch {
                    next.goals = goals;
                }
            }
            Action::UserMessageAppended(text) => {
                next.chat_messages.push(ChatMessage {
                    text,
                    sender: Sender::User,
                });
            }
            Action::AssistantMessageAppended { epoch, text } => {
                if epoch == next.session_epoch {
                    next.chat_messages.push(ChatMessage {
                        text,
                        sender: Sender::Assistant,
                    });
                }
            }
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use shared::TransactionType;

    fn sample_transaction(id: i64) -> Transaction {
        Transaction {
            id,
            amount: 10.0,
            description: format!("transaction {}", id),
            category: Some("food".to_string()),
            transaction_type: TransactionType::Expense,
            date: "2024-01-05T00:00:00.000Z".to_string(),
        }
    }

    fn sample_patterns() -> SpendingPatterns {
        let mut category_spending = IndexMap::new();
        category_spending.insert("food".to_string(), 120.0);
        SpendingPatterns {
            total_expenses: 120.0,
            avg_daily_spending: 4.0,
            category_spending,
        }
    }

    fn apply(state: AppState, action: Action) -> AppState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_login_starts_fresh_session_with_new_epoch() {
        let state = AppState::new(None);
        let state = apply(state, Action::LoggedIn("abc".to_string()));

        assert_eq!(state.token.as_deref(), Some("abc"));
        assert_eq!(state.session_epoch, 1);
        assert!(state.transactions.is_empty());
        assert_eq!(state.active_tab, ActiveTab::Dashboard);
    }

    #[test]
    fn test_logout_clears_everything_in_one_transition() {
        let mut state = AppState::new(Some("abc".to_string()));
        state.session_epoch = 1;
        state.transactions = vec![sample_transaction(1)];
        state.spending_patterns = sample_patterns();
        state.predictions.predicted_monthly_expenses.insert("food".to_string(), 50.0);
        state.goals = vec![Goal {
            id: 1,
            goal_name: "Bike".to_string(),
            target_amount: 100.0,
            current_amount: 40.0,
            progress_percentage: 40.0,
            target_date: None,
            category: None,
        }];
        state.chat_messages.push(ChatMessage {
            text: "hello".to_string(),
            sender: Sender::User,
        });
        state.active_tab = ActiveTab::Chat;

        let state = apply(state, Action::LoggedOut);

        assert_eq!(state.token, None);
        assert!(!state.is_authenticated());
        assert!(state.transactions.is_empty());
        assert_eq!(state.spending_patterns, SpendingPatterns::default());
        assert_eq!(state.predictions, Predictions::default());
        assert!(state.goals.is_empty());
        assert!(state.chat_messages.is_empty());
        assert_eq!(state.session_epoch, 2);
    }

    #[test]
    fn test_slices_update_independently() {
        let mut state = AppState::new(Some("abc".to_string()));
        state.session_epoch = 1;

        // Transactions land; the patterns fetch failed, so no action for it.
        let state = apply(
            state,
            Action::TransactionsLoaded {
                epoch: 1,
                transactions: vec![sample_transaction(1), sample_transaction(2)],
            },
        );

        assert_eq!(state.transactions.len(), 2);
        assert_eq!(state.spending_patterns, SpendingPatterns::default());
    }

    #[test]
    fn test_stale_fetch_result_after_logout_is_discarded() {
        let mut state = AppState::new(Some("abc".to_string()));
        state.session_epoch = 1;

        let state = apply(state, Action::LoggedOut);
        let state = apply(
            state,
            Action::TransactionsLoaded {
                epoch: 1,
                transactions: vec![sample_transaction(1)],
            },
        );

        assert!(state.transactions.is_empty());
    }

    #[test]
    fn test_stale_fetch_result_after_relogin_is_discarded() {
        let mut state = AppState::new(Some("old".to_string()));
        state.session_epoch = 1;

        // Rapid logout/login while a fetch from the old session is in flight.
        let state = apply(state, Action::LoggedOut);
        let state = apply(state, Action::LoggedIn("new".to_string()));
        let state = apply(
            state,
            Action::GoalsLoaded {
                epoch: 1,
                goals: vec![],
            },
        );

        assert_eq!(state.session_epoch, 3);
        assert!(state.goals.is_empty());

        // A result issued under the new session still applies.
        let state = apply(
            state,
            Action::TransactionsLoaded {
                epoch: 3,
                transactions: vec![sample_transaction(7)],
            },
        );
        assert_eq!(state.transactions.len(), 1);
    }

    #[test]
    fn test_chat_log_is_append_only_and_ordered() {
        let mut state = AppState::new(Some("abc".to_string()));
        state.session_epoch = 1;

        let state = apply(state, Action::UserMessageAppended("how am I doing?".to_string()));
        let state = apply(
            state,
            Action::AssistantMessageAppended {
                epoch: 1,
                text: "quite well".to_string(),
            },
        );

        assert_eq!(state.chat_messages.len(), 2);
        assert_eq!(state.chat_messages[0].sender, Sender::User);
        assert_eq!(state.chat_messages[1].sender, Sender::Assistant);
        assert_eq!(state.chat_messages[1].text, "quite well");
    }

    #[test]
    fn test_chat_reply_after_logout_is_discarded() {
        let mut state = AppState::new(Some("abc".to_string()));
        state.session_epoch = 1;

        let state = apply(state, Action::UserMessageAppended("hi".to_string()));
        let state = apply(state, Action::LoggedOut);
        let state = apply(
            state,
            Action::AssistantMessageAppended {
                epoch: 1,
                text: "late reply".to_string(),
            },
        );

        assert!(state.chat_messages.is_empty());
    }

    #[test]
    fn test_tab_selection_is_a_pure_assignment() {
        let mut state = AppState::new(Some("abc".to_string()));
        state.transactions = vec![sample_transaction(1)];

        let state = apply(state, Action::TabSelected(ActiveTab::Goals));

        assert_eq!(state.active_tab, ActiveTab::Goals);
        // Nothing else moves on a tab switch.
        assert_eq!(state.transactions.len(), 1);
    }
}
