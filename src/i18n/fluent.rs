// SPDX-License-Identifier: MPL-2.0
//! Fluent catalog loading and message resolution.
//!
//! Catalogs are embedded at build time; an `--i18n-dir` override can
//! replace them per locale at startup for translation work without a
//! rebuild.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded catalogs, applies any directory override, and
    /// picks the locale from CLI, config, then OS settings, in that order.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<&Path>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            // An embedded catalog that fails to build is a packaging
            // defect; surface it at startup rather than at lookup time.
            let bundle = build_bundle(&locale, source)
                .unwrap_or_else(|reason| panic!("embedded catalog {filename}: {reason}"));

            bundles.insert(locale.clone(), bundle);
            available.push(locale);
        }

        if let Some(dir) = i18n_dir {
            load_directory_bundles(dir, &mut bundles, &mut available);
        }

        let fallback: LanguageIdentifier =
            "en-US".parse().expect("en-US is a valid language tag");
        let current_locale = resolve_locale(cli_lang, config, &available).unwrap_or(fallback);

        Self {
            bundles,
            current_locale,
        }
    }

    /// Resolves a message key in the current locale.
    ///
    /// Unknown keys come back as `MISSING: <key>` so they are visible in
    /// the UI instead of silently blank.
    pub fn tr(&self, key: &str) -> String {
        self.format_message(key, None)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Resolves a message key with interpolation arguments.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }

        self.format_message(key, Some(&fluent_args))
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    fn format_message(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&self.current_locale)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        errors.is_empty().then(|| value.to_string())
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename
        .strip_suffix(".ftl")
        .and_then(|stem| stem.parse().ok())
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> std::result::Result<FluentBundle<FluentResource>, &'static str> {
    let resource = FluentResource::try_new(source).map_err(|_| "invalid FTL syntax")?;

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Directional isolation marks render as tofu in the bundled font.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|_| "duplicate message identifiers")?;

    Ok(bundle)
}

/// Loads `.ftl` files from an override directory, replacing embedded
/// catalogs for the same locale. Unusable files are reported and skipped.
fn load_directory_bundles(
    dir: &Path,
    bundles: &mut HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available: &mut Vec<LanguageIdentifier>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!(
                "i18n: cannot read translation directory {}: {err}",
                dir.display()
            );
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(filename) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(stem) = filename.strip_suffix(".ftl") else {
            continue;
        };
        let Ok(locale) = stem.parse::<LanguageIdentifier>() else {
            eprintln!("i18n: skipping {filename}: not a valid locale name");
            continue;
        };

        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("i18n: cannot read {}: {err}", path.display());
                continue;
            }
        };

        match build_bundle(&locale, source) {
            Ok(bundle) => {
                if !available.contains(&locale) {
                    available.push(locale.clone());
                }
                bundles.insert(locale, bundle);
            }
            Err(reason) => {
                eprintln!("i18n: {}: {reason}", path.display());
            }
        }
    }
}

/// First requested locale that actually has a catalog wins; the CLI
/// outranks the config file, which outranks the OS locale.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let requested = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    requested
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find(|locale| available.contains(locale))
}
