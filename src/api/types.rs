use serde::{Deserialize, Serialize};
use std::fmt;

/// One provisioning entry as returned by `GET /api/accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub gmail: String,
    pub status: AccountStatus,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AccountRecord {
    /// The key, if one was issued. Empty strings count as missing.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref().filter(|value| !value.is_empty())
    }
}

/// Provisioning stage reported by the backend.
///
/// The set is open: anything the pipeline invents later lands in
/// `Unknown` with its raw text so it can still be printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountStatus {
    CreatingGmail,
    GeneratingApiKey,
    Completed,
    GmailCreationFailed,
    ApiKeyGenerationFailed,
    Error,
    Pending,
    Unknown(String),
}

impl AccountStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AccountStatus::CreatingGmail => "creating_gmail",
            AccountStatus::GeneratingApiKey => "generating_api_key",
            AccountStatus::Completed => "completed",
            AccountStatus::GmailCreationFailed => "gmail_creation_failed",
            AccountStatus::ApiKeyGenerationFailed => "api_key_generation_failed",
            AccountStatus::Error => "error",
            AccountStatus::Pending => "pending",
            AccountStatus::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for AccountStatus {
    fn from(value: &str) -> Self {
        match value {
            "creating_gmail" => AccountStatus::CreatingGmail,
            "generating_api_key" => AccountStatus::GeneratingApiKey,
            "completed" => AccountStatus::Completed,
            "gmail_creation_failed" => AccountStatus::GmailCreationFailed,
            "api_key_generation_failed" => AccountStatus::ApiKeyGenerationFailed,
            "error" => AccountStatus::Error,
            "pending" => AccountStatus::Pending,
            other => AccountStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for AccountStatus {
    fn from(value: String) -> Self {
        match AccountStatus::from(value.as_str()) {
            AccountStatus::Unknown(_) => AccountStatus::Unknown(value),
            known => known,
        }
    }
}

impl From<AccountStatus> for String {
    fn from(value: AccountStatus) -> Self {
        match value {
            AccountStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
