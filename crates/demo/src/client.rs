use crate::error::ForwardError;
use tracing::debug;

/// Logical name of the downstream service, used in log output only.
pub const PROVIDER_SERVICE_NAME: &str = "LOCALHOSTPROVIDER";

const RECEIVER_PATH: &str = "/myfeignreceiver";

/// Typed client for the localhostprovider receiver endpoint.
///
/// One call is one GET. There is no retry and no timeout override, so the
/// `reqwest::Client` defaults apply.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    base_url: String,
    client: reqwest::Client,
}

impl ProviderClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// `GET {base}/myfeignreceiver?myValue=<my_value>`, returning the body as-is.
    pub async fn get_my_value(&self, my_value: &str) -> Result<String, ForwardError> {
        let url = format!("{}{}", self.base_url, RECEIVER_PATH);
        debug!("Calling {} at {}", PROVIDER_SERVICE_NAME, url);

        let response = self
            .client
            .get(&url)
            .query(&[("myValue", my_value)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ForwardError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_get_my_value_success() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/myfeignreceiver")
            .match_query(Matcher::UrlEncoded("myValue".into(), "abc".into()))
            .with_status(200)
            .with_header("content-type", "text/plain;charset=UTF-8")
            .with_body("This was actually delivered by localhostprovider running locally: abc")
            .expect(1)
            .create_async()
            .await;

        let client = ProviderClient::new(server.url());
        let result = client.get_my_value("abc").await;

        mock.assert_async().await;
        assert_eq!(
            result.unwrap(),
            "This was actually delivered by localhostprovider running locally: abc"
        );
    }

    #[tokio::test]
    async fn test_get_my_value_encodes_param() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/myfeignreceiver")
            .match_query(Matcher::UrlEncoded("myValue".into(), "a b&c=d".into()))
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let client = ProviderClient::new(server.url());
        let result = client.get_my_value("a b&c=d").await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_get_my_value_non_success_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/myfeignreceiver")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("Service unavailable")
            .expect(1)
            .create_async()
            .await;

        let client = ProviderClient::new(server.url());
        let result = client.get_my_value("abc").await;

        mock.assert_async().await;
        match result {
            Err(ForwardError::UpstreamStatus { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "Service unavailable");
            }
            other => panic!("expected UpstreamStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_my_value_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ProviderClient::new(format!("http://{}", addr));
        let result = client.get_my_value("abc").await;

        assert!(matches!(result, Err(ForwardError::Request(_))));
    }
}
