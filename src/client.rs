use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::constants::{USER_AGENT, WEATHER_QUERY};
use crate::error::{LookupError, Result};
use crate::formatters::{format_definitions, no_weather_info, unknown_word};
use crate::key_expr::lookup_term;
use crate::models::DictionaryEntry;

/// Performs dictionary and weather lookups for key expressions
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: Client,
    config: Config,
}

impl LookupClient {
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(LookupError::Client)?;

        Ok(Self { client, config })
    }

    pub fn dictionary_url(&self, word: &str) -> String {
        format!("{}/{}", self.config.dictionary_api_base, word)
    }

    pub fn weather_url(&self, city: &str) -> String {
        format!("{}/{}?{}", self.config.weather_api_base, city, WEATHER_QUERY)
    }

    /// Looks up the word named by `key_expr` and lists its definitions.
    ///
    /// Words the dictionary does not know resolve to the "I don't know this
    /// word" reply rather than an error.
    pub async fn define(&self, key_expr: &str) -> Result<String> {
        let word = lookup_term(key_expr)?;

        match self.fetch_entries(word).await {
            Ok(entries) => format_definitions(&entries),
            Err(LookupError::NotFound { status, .. }) => {
                tracing::info!("No definition for {:?} (status {})", word, status);
                Ok(unknown_word())
            }
            Err(e) => Err(e),
        }
    }

    /// Fetches the weather report for the city named by `key_expr`.
    pub async fn weather(&self, key_expr: &str) -> Result<String> {
        let city = lookup_term(key_expr)?;

        match self.fetch_weather(city).await {
            Ok(report) => Ok(report),
            Err(LookupError::NotFound { status, .. }) => {
                tracing::info!("No weather report for {:?} (status {})", city, status);
                Ok(no_weather_info(city))
            }
            Err(e) => Err(e),
        }
    }

    /// Fetches the raw dictionary entries for `word`. Only a 200 counts as found.
    pub async fn fetch_entries(&self, word: &str) -> Result<Vec<DictionaryEntry>> {
        let url = self.dictionary_url(word);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!(%url, %status, "Dictionary response");

        if status != StatusCode::OK {
            return Err(LookupError::NotFound {
                term: word.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches the preformatted weather report for `city`. Any 2xx counts as found.
    pub async fn fetch_weather(&self, city: &str) -> Result<String> {
        let url = self.weather_url(city);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!(%url, %status, "Weather response");

        if !status.is_success() {
            return Err(LookupError::NotFound {
                term: city.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}
