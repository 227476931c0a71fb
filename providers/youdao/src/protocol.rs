//! The dictionary `openapi.do` protocol shared by YouDao and its mirrors.
//!
//! One GET per translation with `key`, `keyfrom`, `type=data`, `doctype=json`,
//! `version=1.1` and `q`. The answer looks like
//! `{"errorCode":0,"basic":{"phonetic":"..","explains":[..]},"translation":[..]}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tongues_translator::{
    ConfigError, ErrorMessages, Extracted, LanguageCode, LanguageTable, ProviderConfig,
    ProviderMetadata, Query, TranslateError, Translation, Translator, normalize,
};

/// Everything that differs between two backends speaking this protocol
#[derive(Debug)]
pub struct Profile {
    /// Registry identifier
    pub provider: &'static str,
    /// Display name
    pub name: &'static str,
    pub link: &'static str,
    pub endpoint: &'static str,
    /// Online result page, the query text is appended
    pub result_page: &'static str,
    pub languages: &'static LanguageTable,
    pub messages: ErrorMessages,
}

const AUDIO_ENDPOINT: &str = "http://tts.youdao.com/fanyivoice?keyfrom=fanyi%2Eweb%2Eindex";

/// One credential set for an `openapi.do` backend
#[derive(Clone)]
pub struct DictTranslator {
    profile: &'static Profile,
    client: reqwest::Client,
    api_key: String,
    key_from: String,
    timeout: Option<Duration>,
    api_url: String,
}

#[derive(Debug, Deserialize)]
struct Basic {
    phonetic: Option<String>,
    explains: Option<Vec<String>>,
}

impl DictTranslator {
    pub fn new(profile: &'static Profile, config: ProviderConfig) -> Result<Self, ConfigError> {
        let (api_key, key_from) = config.key_pair(profile.provider)?;

        Ok(Self {
            profile,
            client: reqwest::Client::new(),
            api_key,
            key_from,
            timeout: config.timeout(),
            api_url: config
                .api_url
                .unwrap_or_else(|| profile.endpoint.to_string()),
        })
    }

    /// Normalize a raw `openapi.do` payload
    pub fn transform(&self, raw: Option<Value>, query: &Query) -> Translation {
        let link = format!(
            "{}{}",
            self.profile.result_page,
            urlencoding::encode(&query.text)
        );

        normalize(
            self.profile.name,
            &self.profile.messages,
            query,
            raw,
            link,
            extract,
        )
    }
}

/// Decode one top-level field, `None` when it is missing or malformed
fn field<T: DeserializeOwned>(raw: &Value, key: &str) -> Option<T> {
    let value = raw.get(key)?;
    T::deserialize(value)
        .map_err(|e| tracing::debug!("ignoring malformed `{key}`: {e}"))
        .ok()
}

/// `errorCode` as a number, or as a numeric string
fn error_code(raw: &Value) -> Option<i64> {
    match raw.get("errorCode")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn extract(raw: &Value) -> Extracted {
    let (detailed, phonetic) = match field::<Basic>(raw, "basic") {
        Some(basic) => (basic.explains, basic.phonetic),
        None => (None, None),
    };

    Extracted {
        error_code: error_code(raw).filter(|code| *code != 0),
        detailed,
        phonetic,
        result: field(raw, "translation"),
    }
}

#[async_trait]
impl Translator for DictTranslator {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: self.profile.name.to_string(),
            link: self.profile.link.to_string(),
        }
    }

    fn languages(&self) -> &'static LanguageTable {
        self.profile.languages
    }

    /// The backend picks both languages itself, `from`/`to` are not sent
    async fn translate(&self, query: &Query) -> Result<Translation, TranslateError> {
        let params = [
            ("key", self.api_key.as_str()),
            ("keyfrom", self.key_from.as_str()),
            ("type", "data"),
            ("doctype", "json"),
            ("version", "1.1"),
            ("q", query.text.as_str()),
        ];

        let mut request = self.client.get(&self.api_url).query(&params);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.bytes().await?;

        let raw = serde_json::from_slice::<Value>(&body)
            .map_err(|e| tracing::debug!(provider = self.profile.provider, "unreadable body: {e}"))
            .ok();

        Ok(self.transform(raw, query))
    }

    async fn audio(&self, query: &Query) -> Result<String, TranslateError> {
        let lang: LanguageCode = self.detect(query).await?;
        let custom = self
            .resolve(&lang, false)
            .ok_or(TranslateError::Unsupported)?;

        Ok(format!(
            "{AUDIO_ENDPOINT}&le={custom}&word={}",
            urlencoding::encode(&query.text)
        ))
    }
}

impl std::fmt::Debug for DictTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictTranslator")
            .field("provider", &self.profile.provider)
            .field("api_key", &"***")
            .field("key_from", &self.key_from)
            .field("timeout", &self.timeout)
            .field("api_url", &self.api_url)
            .finish()
    }
}
