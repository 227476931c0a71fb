pub mod protocol;
pub mod reddwarf;
pub mod youdao;

use tongues_translator::Factory;

pub use protocol::{DictTranslator, Profile};

/// Provider identifiers and their factories, for registration at startup
pub const PROVIDERS: &[(&str, Factory)] = &[
    ("YouDao", youdao::factory),
    ("Reddwarf", reddwarf::factory),
];
