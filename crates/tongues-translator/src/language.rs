/// Fixed bidirectional mapping between standard language codes and the
/// codes one provider understands.
#[derive(Debug)]
pub struct LanguageTable {
    standard_to_custom: &'static [(&'static str, &'static str)],
    custom_to_standard: &'static [(&'static str, &'static str)],
}

impl LanguageTable {
    pub const fn new(
        standard_to_custom: &'static [(&'static str, &'static str)],
        custom_to_standard: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            standard_to_custom,
            custom_to_standard,
        }
    }

    /// Case-insensitive lookup. `None` means the provider cannot handle the language.
    pub fn resolve(&self, lang: &str, invert: bool) -> Option<&'static str> {
        let table = if invert {
            self.custom_to_standard
        } else {
            self.standard_to_custom
        };

        table
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(lang))
            .map(|(_, mapped)| *mapped)
    }

    /// Standard codes this provider supports
    pub fn standard_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.standard_to_custom.iter().map(|(code, _)| *code)
    }
}
