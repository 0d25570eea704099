use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::{
    AuthResponse, ChatRequest, ChatResponse, CreateGoalRequest, CreateTransactionRequest, Goal,
    GoalListResponse, LoginRequest, Predictions, RegisterRequest, SpendingPatterns, Transaction,
    TransactionListResponse,
};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// A failed API call. `Backend` carries the message the server provided
/// (FastAPI puts it under `detail`); the other variants never reached a
/// well-formed response.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Shape of FastAPI error bodies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// API client for the finance backend.
///
/// Holds the bearer token for the current session; construct a fresh one
/// whenever the token changes so every request carries the current
/// credential (or none).
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client against the default base URL.
    pub fn new(token: Option<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
        }
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: String, token: Option<String>) -> Self {
        Self { base_url, token }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json("/auth/register", request).await
    }

    /// Fetch the transaction list, most-recent-first as the backend orders it.
    pub async fn get_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let response: TransactionListResponse = self.get_json("/transactions").await?;
        Ok(response.transactions)
    }

    pub async fn get_spending_patterns(&self) -> Result<SpendingPatterns, ApiError> {
        self.get_json("/analytics/spending-patterns").await
    }

    pub async fn get_predictions(&self) -> Result<Predictions, ApiError> {
        self.get_json("/analytics/predictions").await
    }

    pub async fn get_goals(&self) -> Result<Vec<Goal>, ApiError> {
        let response: GoalListResponse = self.get_json("/goals").await?;
        Ok(response.goals)
    }

    /// Create a transaction. The response body is ignored; the caller
    /// re-fetches the affected collections instead of patching locally.
    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<(), ApiError> {
        self.post_and_discard("/transactions", request).await
    }

    /// Create a goal. Same re-fetch contract as `create_transaction`.
    pub async fn create_goal(&self, request: &CreateGoalRequest) -> Result<(), ApiError> {
        self.post_and_discard("/goals", request).await
    }

    /// One request/response exchange with the assistant.
    pub async fn send_chat_message(&self, message: &str) -> Result<String, ApiError> {
        let request = ChatRequest {
            message: message.to_string(),
        };
        let response: ChatResponse = self.post_json("/chat", &request).await?;
        Ok(response.response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer credential when a session token is present.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::parse_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::parse_json(response).await
    }

    async fn post_and_discard<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(Self::backend_error(response).await)
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(Self::backend_error(response).await);
        }

        match response.json::<T>().await {
            Ok(data) => Ok(data),
            Err(e) => Err(ApiError::Parse(e.to_string())),
        }
    }

    async fn backend_error(response: Response) -> ApiError {
        let status = response.status();
        let message = match response.text().await {
            Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
                Ok(ErrorBody {
                    detail: Some(detail),
                }) => detail,
                _ if !body.is_empty() => body,
                _ => format!("request failed with status {}", status),
            },
            Err(_) => format!("request failed with status {}", status),
        };

        ApiError::Backend { status, message }
    }
}
