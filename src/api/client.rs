use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::{
    api::types::AccountRecord,
    error::{Result, StatusError},
};

pub const ACCOUNTS_PATH: &str = "/api/accounts";

/// Thin client for the provisioning backend's account listing.
#[derive(Clone)]
pub struct AccountsClient {
    client: Client,
    endpoint: String,
}

impl AccountsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ACCOUNTS_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full account list.
    ///
    /// Any non-2xx answer is a failure and its body is never read.
    pub async fn fetch_accounts(&self) -> Result<Vec<AccountRecord>> {
        debug!("GET {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::UnexpectedStatus(status));
        }

        let body = response.bytes().await?;
        let accounts: Vec<AccountRecord> = serde_json::from_slice(&body)?;

        debug!("Received {} account records", accounts.len());
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::AccountStatus;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AccountsClient {
        AccountsClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = AccountsClient::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:5000/api/accounts");
    }

    #[tokio::test]
    async fn test_fetch_accounts_decodes_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ACCOUNTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"gmail":"a@x.com","status":"completed","api_key":"K123","created_at":"2024-01-01T00:00:00Z"}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let accounts = client_for(&server).fetch_accounts().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].gmail, "a@x.com");
        assert_eq!(accounts[0].status, AccountStatus::Completed);
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ACCOUNTS_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("[]"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_accounts().await.unwrap_err();
        assert!(matches!(
            err,
            StatusError::UnexpectedStatus(code) if code == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ACCOUNTS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"accounts\": 3}"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_accounts().await.unwrap_err();
        assert!(matches!(err, StatusError::Decode(_)));
        assert!(!err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_fetch_failure() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let client = AccountsClient::new(&uri, Duration::from_secs(2)).unwrap();
        let err = client.fetch_accounts().await.unwrap_err();
        assert!(err.is_fetch_failure());
    }
}
