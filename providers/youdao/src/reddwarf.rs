//! Reddwarf, a YouDao-compatible dictionary service. Same protocol, its own
//! endpoint and result pages. Languages and audio are YouDao's.

use std::sync::Arc;

use tongues_translator::{ConfigError, ErrorMessages, ProviderConfig, Translator};

use crate::protocol::{DictTranslator, Profile};
use crate::youdao::LANGUAGES;

pub static PROFILE: Profile = Profile {
    provider: "Reddwarf",
    name: "Reddwarf Translate",
    link: "http://dict.poemhub.top/",
    endpoint: "https://dict.poemhub.top/openapi.do",
    result_page: "http://dict.poemhub.top/translate?i=",
    languages: &LANGUAGES,
    messages: ErrorMessages(&[
        (20, "Reddwarf Translate accepts at most 200 characters per request"),
        (30, "Reddwarf Translate cannot translate this text right now"),
        (40, "Reddwarf Translate does not support this language"),
        (50, "The API key has been banned"),
        (60, "No dictionary result"),
    ]),
};

pub fn new(config: ProviderConfig) -> Result<DictTranslator, ConfigError> {
    DictTranslator::new(&PROFILE, config)
}

pub fn factory(config: ProviderConfig) -> Result<Arc<dyn Translator>, ConfigError> {
    Ok(Arc::new(new(config)?))
}
