use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::error::{Error, server_message};
use super::types::{
    LanguageCatalog, LanguageDirection, LanguageEntry, TranslateResponse, TranslationOptions,
    TranslationResult, UsageInformation,
};

/// Base URL for keys of the free plan.
pub const FREE_API_URL: &str = "https://api-free.deepl.com/v2";

/// Base URL for keys of the paid plan.
pub const PRO_API_URL: &str = "https://api.deepl.com/v2";

const FREE_KEY_SUFFIX: &str = ":fx";

type Form = Vec<(&'static str, String)>;

/// A DeepL account, identified by its API key.
///
/// Create one instance per key. The client is cheap to clone and holds no
/// mutable state.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Creates a client, picking the free or paid host from the key suffix.
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let base_url = if api_key.ends_with(FREE_KEY_SUFFIX) {
            FREE_API_URL
        } else {
            PRO_API_URL
        };
        Self::with_base_url(api_key, base_url)
    }

    /// Creates a client that talks to `base_url` regardless of the key.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieves usage and limits for the account.
    ///
    /// This also verifies an API key without spending translation quota.
    pub async fn get_usage(&self) -> Result<UsageInformation, Error> {
        self.call("/usage", Form::new()).await
    }

    /// Retrieves the languages available on one side of a translation.
    pub async fn list_languages(
        &self,
        direction: LanguageDirection,
    ) -> Result<LanguageCatalog, Error> {
        let form = vec![("type", direction.as_str().to_string())];
        let entries: Vec<LanguageEntry> = self.call("/languages", form).await?;

        Ok(entries
            .into_iter()
            .map(|entry| (entry.language, entry.name))
            .collect())
    }

    pub async fn source_languages(&self) -> Result<LanguageCatalog, Error> {
        self.list_languages(LanguageDirection::Source).await
    }

    pub async fn target_languages(&self) -> Result<LanguageCatalog, Error> {
        self.list_languages(LanguageDirection::Target).await
    }

    /// Translates one or more texts into `target_language`.
    ///
    /// The result holds one entry per input text, in input order. The
    /// target code is not checked locally; the service rejects unknown codes
    /// with [`Error::Server`].
    pub async fn translate<S: AsRef<str>>(
        &self,
        target_language: &str,
        texts: &[S],
        options: &TranslationOptions,
    ) -> Result<TranslationResult, Error> {
        let mut form = vec![("target_lang", target_language.to_string())];
        form.extend(texts.iter().map(|text| ("text", text.as_ref().to_string())));
        form.extend(options.form_fields());

        let response: TranslateResponse = self.call("/translate", form).await?;
        Ok(response.translations)
    }

    async fn call<T: DeserializeOwned>(&self, path: &str, mut form: Form) -> Result<T, Error> {
        let url = format!("{}{path}", self.base_url);
        form.push(("auth_key", self.api_key.clone()));

        debug!("POST {url}");
        let response = self.http.post(&url).form(&form).send().await?;
        let status = response.status();
        debug!("{url} responded with {status}");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Authorization);
        }

        let status_error = response.error_for_status_ref().err();
        let body = response.bytes().await?;

        if let Some(status_error) = status_error {
            return Err(server_message(&body).map_or(Error::Transport(status_error), Error::Server));
        }

        serde_json::from_slice(&body).map_err(Error::Deserialization)
    }
}
