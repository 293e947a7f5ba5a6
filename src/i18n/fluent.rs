// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translations.
//!
//! `.ftl` resources are embedded in the binary; one bundle is built per
//! locale at startup. Locale resolution tries, in order: the `--lang` flag,
//! the configured language, the OS locale, and finally `en-US`.

use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let (bundles, available_locales) = load_bundles();

        let current_locale = [cli_lang, config.language.clone(), sys_locale::get_locale()]
            .into_iter()
            .flatten()
            .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
            .find(|locale| available_locales.contains(locale))
            .unwrap_or_else(|| {
                FALLBACK_LOCALE
                    .parse()
                    .expect("static locale tag is valid")
            });

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates `key` in the current locale.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with the given named arguments.
    pub fn tr_with(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.as_str());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let pattern = self
            .bundles
            .get(&self.current_locale)
            .and_then(|bundle| Some((bundle, bundle.get_message(key)?.value()?)));

        match pattern {
            Some((bundle, pattern)) => {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    value.to_string()
                } else {
                    format!("MISSING: {key}")
                }
            }
            None => format!("MISSING: {key}"),
        }
    }
}

type Bundles = HashMap<LanguageIdentifier, FluentBundle<FluentResource>>;

/// Builds one bundle per embedded `<locale>.ftl` resource.
fn load_bundles() -> (Bundles, Vec<LanguageIdentifier>) {
    let mut bundles = HashMap::new();
    let mut locales = Vec::new();

    for filename in Asset::iter() {
        let locale = filename
            .strip_suffix(".ftl")
            .and_then(|stem| stem.parse::<LanguageIdentifier>().ok());
        let content = Asset::get(&filename);

        if let (Some(locale), Some(content)) = (locale, content) {
            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            let resource =
                FluentResource::try_new(source).expect("embedded FTL resource must parse");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle
                .add_resource(resource)
                .expect("embedded FTL resource must be addable");
            bundles.insert(locale.clone(), bundle);
            locales.push(locale);
        }
    }

    (bundles, locales)
}
