//! Client for the Inflation Rate API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};

use crate::{
    config::ClientOptions,
    http::HttpClient,
    query::InflationRateQuery,
    types::{ApiResponse, InflationRateData},
};

/// Response envelope returned by the Inflation Rate API.
pub type InflationRateResponse = ApiResponse<InflationRateData>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InflationRateApi: Send + Sync {
    /// Sends the query and returns the response envelope as the API sent it.
    async fn execute(&self, query: &InflationRateQuery) -> Result<InflationRateResponse>;

    fn endpoint(&self) -> &str;
}

/// Sends the query and returns the data, failing on an error envelope.
pub async fn fetch<A: InflationRateApi + ?Sized>(
    api: &A,
    query: &InflationRateQuery,
) -> Result<InflationRateData> {
    let response = api.execute(query).await?;
    Ok(response.into_result()?)
}

#[derive(Clone)]
pub struct InflationRateClient {
    http: HttpClient,
    endpoint: String,
}

impl InflationRateClient {
    /// Builds a client from connection options.
    #[tracing::instrument(skip(options))]
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let client = options.build_client()?;
        Ok(Self::with_http_client(
            HttpClient::new(client),
            options.endpoint(),
        ))
    }

    pub fn with_http_client(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Sends the query and returns the data, failing on an error envelope.
    pub async fn fetch(&self, query: &InflationRateQuery) -> Result<InflationRateData> {
        fetch(self, query).await
    }
}

#[async_trait]
impl InflationRateApi for InflationRateClient {
    #[tracing::instrument(skip(self))]
    async fn execute(&self, query: &InflationRateQuery) -> Result<InflationRateResponse> {
        query.validate()?;

        let pairs = query.to_query_pairs();
        debug!("Requesting inflation data from {}...", self.endpoint);

        let response: InflationRateResponse = self
            .http
            .get_json_with_query(&self.endpoint, &pairs)
            .await
            .with_context(|| format!("Failed to retrieve inflation data from {}", self.endpoint))?;

        if let Some(data) = &response.data {
            info!(
                "Inflation rate for {} in {}: {}%",
                data.country, data.year, data.inflation_rate
            );
        }

        Ok(response)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::NonRetryableError;
    use crate::query::QueryError;
    use crate::types::ApiError;
    use mockito::{Matcher, Server};

    const PATH: &str = "/v1/inflationrate";

    fn path_matcher() -> Matcher {
        Matcher::Regex(r"^/v1/inflationrate(\?.*)?$".to_string())
    }

    fn ok_body(country: &str, year: i32) -> String {
        format!(
            r#"{{
                "status": "ok",
                "error": null,
                "data": {{
                    "country": "{}",
                    "countryName": "United Kingdom",
                    "year": {},
                    "inflationRate": 7.3,
                    "cpiIndex": 127.8,
                    "cpiBaseYear": 2015,
                    "lastUpdated": "2024-05-15"
                }},
                "code": 200
            }}"#,
            country, year
        )
    }

    fn client_for(server: &Server) -> InflationRateClient {
        let options = ClientOptions::new("test-key")
            .unwrap()
            .api_url(format!("{}{}", server.url(), PATH));
        InflationRateClient::new(&options).unwrap()
    }

    #[test_log::test(tokio::test)]
    async fn test_execute_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", path_matcher())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("country".into(), "GB".into()),
                Matcher::UrlEncoded("year".into(), "2022".into()),
            ]))
            .match_header("x-api-key", "test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ok_body("GB", 2022))
            .create_async()
            .await;

        let client = client_for(&server);
        let query = InflationRateQuery::new().country("gb").year(2022);
        let response = client.execute(&query).await.unwrap();

        mock.assert_async().await;
        assert!(response.is_ok());
        let data = response.data.unwrap();
        assert_eq!(data.country, "GB");
        assert_eq!(data.year, 2022);
        assert_eq!(data.inflation_rate, 7.3);
    }

    #[tokio::test]
    async fn test_execute_without_options() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ok_body("US", 2023))
            .create_async()
            .await;

        let client = client_for(&server);
        let data = client.fetch(&InflationRateQuery::new()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(data.country, "US");
    }

    #[tokio::test]
    async fn test_execute_invalid_query_sends_nothing() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .execute(&InflationRateQuery::new().country("USA"))
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert!(matches!(
            err.downcast_ref::<QueryError>(),
            Some(QueryError::InvalidCountry(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_error_envelope() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", path_matcher())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"error","error":"No data for year","data":null,"code":404}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .fetch(&InflationRateQuery::new().year(1961))
            .await
            .unwrap_err();

        let api_error = err.downcast_ref::<ApiError>().unwrap();
        assert_eq!(api_error.message, "No data for year");
        assert_eq!(api_error.code, Some(404));
    }

    #[tokio::test]
    async fn test_execute_bad_key() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", PATH)
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"error","error":"Invalid API Key","data":null}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.execute(&InflationRateQuery::new()).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<NonRetryableError>(),
            Some(NonRetryableError::AuthenticationFailed(msg)) if msg == "Invalid API Key"
        ));
        assert!(format!("{:#}", err).contains("Failed to retrieve inflation data"));
    }

    #[tokio::test]
    async fn test_fetch_through_mock_api() {
        let mut api = MockInflationRateApi::new();
        api.expect_execute().returning(|_| {
            Ok(ApiResponse {
                status: "error".to_string(),
                error: Some("Country not supported".to_string()),
                data: None,
                code: Some(400),
            })
        });

        let err = fetch(&api, &InflationRateQuery::new().country("ZZ"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Country not supported"));
    }

    #[test]
    fn test_endpoint() {
        let options = ClientOptions::new("key").unwrap();
        let client = InflationRateClient::new(&options).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://api.apiverve.com/v1/inflationrate"
        );
    }
}
