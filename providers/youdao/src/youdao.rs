use std::sync::Arc;

use tongues_translator::{ConfigError, ErrorMessages, LanguageTable, ProviderConfig, Translator};

use crate::protocol::{DictTranslator, Profile};

/// Also used by the YouDao mirrors
pub(crate) static LANGUAGES: LanguageTable = LanguageTable::new(
    &[
        ("en", "eng"),
        ("ja", "jap"),
        ("ko", "ko"),
        ("fr", "fr"),
        ("ru", "ru"),
        ("es", "es"),
    ],
    &[
        ("eng", "en"),
        ("jap", "ja"),
        ("ko", "ko"),
        ("fr", "fr"),
        ("ru", "ru"),
        ("es", "es"),
    ],
);

pub static PROFILE: Profile = Profile {
    provider: "YouDao",
    name: "YouDao Translate",
    link: "http://fanyi.youdao.com/",
    endpoint: "https://fanyi.youdao.com/openapi.do",
    result_page: "http://fanyi.youdao.com/translate?i=",
    languages: &LANGUAGES,
    messages: ErrorMessages(&[
        (20, "YouDao Translate accepts at most 200 characters per request"),
        (30, "YouDao Translate cannot translate this text right now"),
        (40, "YouDao Translate does not support this language"),
        (50, "The API key is invalid or has been banned"),
        (60, "No dictionary result"),
    ]),
};

pub fn new(config: ProviderConfig) -> Result<DictTranslator, ConfigError> {
    DictTranslator::new(&PROFILE, config)
}

pub fn factory(config: ProviderConfig) -> Result<Arc<dyn Translator>, ConfigError> {
    Ok(Arc::new(new(config)?))
}
