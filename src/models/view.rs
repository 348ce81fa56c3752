use crate::models::country::RawCountryRecord;
use serde::{Deserialize, Serialize};

const LIST_SEPARATOR: &str = ", ";
const NOT_AVAILABLE: &str = "N/A";

/// Flat, display-ready form of a [`RawCountryRecord`].
///
/// Everything except `borders` is fixed when the model is built. `borders`
/// starts empty and is replaced once the border names have been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryViewModel {
    pub name: String,
    pub native_name: Option<String>,
    pub population: u64,
    pub region: String,
    pub subregion: String,
    pub capital: Vec<String>,
    pub flag_url: String,
    pub top_level_domains: Vec<String>,
    pub languages_display: String,
    pub currencies_display: String,
    pub borders: Vec<String>,
}

/// Builds the view model for a raw record. Never fails: absent optional
/// fields become empty values.
pub fn build_view_model(raw: &RawCountryRecord) -> CountryViewModel {
    let native_name = raw
        .name
        .native_name
        .as_ref()
        .and_then(|names| names.values().next())
        .map(|native| native.common.clone());

    let languages_display = raw
        .languages
        .as_ref()
        .map(|languages| {
            languages
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR)
        })
        .unwrap_or_default();

    let currencies_display = raw
        .currencies
        .as_ref()
        .map(|currencies| {
            currencies
                .values()
                .map(|currency| currency.name.as_str())
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR)
        })
        .unwrap_or_default();

    CountryViewModel {
        name: raw.name.common.clone(),
        native_name,
        population: raw.population,
        region: raw.region.clone(),
        subregion: raw.subregion.clone().unwrap_or_default(),
        capital: raw.capital.clone().unwrap_or_default(),
        flag_url: raw.flags.svg.clone(),
        top_level_domains: raw.tld.clone().unwrap_or_default(),
        languages_display,
        currencies_display,
        borders: Vec::new(),
    }
}

impl CountryViewModel {
    /// Native name if the record carried one, otherwise the common name.
    pub fn display_native_name(&self) -> &str {
        self.native_name.as_deref().unwrap_or(&self.name)
    }

    pub fn capital_display(&self) -> String {
        join_or_not_available(&self.capital)
    }

    pub fn top_level_domains_display(&self) -> String {
        join_or_not_available(&self.top_level_domains)
    }
}

fn join_or_not_available(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(LIST_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::country::{CountryName, Currency, NativeName};
    use indexmap::IndexMap;

    fn testland() -> RawCountryRecord {
        RawCountryRecord {
            name: CountryName {
                common: "Testland".to_string(),
                ..Default::default()
            },
            population: 1000,
            borders: Some(vec!["AAA".to_string(), "BBB".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn native_name_is_absent_without_mapping() {
        let view = build_view_model(&testland());

        assert_eq!(view.native_name, None);
        assert_eq!(view.display_native_name(), "Testland");
    }

    #[test]
    fn native_name_takes_first_entry() {
        let mut raw = testland();
        let mut native = IndexMap::new();
        native.insert(
            "tst".to_string(),
            NativeName {
                common: "Testlandia".to_string(),
                official: None,
            },
        );
        native.insert(
            "eng".to_string(),
            NativeName {
                common: "Testland".to_string(),
                official: None,
            },
        );
        raw.name.native_name = Some(native);

        let view = build_view_model(&raw);

        assert_eq!(view.native_name.as_deref(), Some("Testlandia"));
        assert_eq!(view.display_native_name(), "Testlandia");
    }

    #[test]
    fn languages_and_currencies_join_in_source_order() {
        let mut raw = testland();
        let mut languages = IndexMap::new();
        languages.insert("nld".to_string(), "Dutch".to_string());
        languages.insert("fra".to_string(), "French".to_string());
        languages.insert("deu".to_string(), "German".to_string());
        raw.languages = Some(languages);

        let mut currencies = IndexMap::new();
        currencies.insert(
            "XTL".to_string(),
            Currency {
                name: "Test lira".to_string(),
                symbol: None,
            },
        );
        currencies.insert(
            "EUR".to_string(),
            Currency {
                name: "Euro".to_string(),
                symbol: Some("€".to_string()),
            },
        );
        raw.currencies = Some(currencies);

        let view = build_view_model(&raw);

        assert_eq!(view.languages_display, "Dutch, French, German");
        assert_eq!(view.currencies_display, "Test lira, Euro");
    }

    #[test]
    fn borders_start_empty_even_when_codes_exist() {
        let view = build_view_model(&testland());

        assert!(view.borders.is_empty());
        assert_eq!(view.population, 1000);
    }

    #[test]
    fn absent_lists_display_as_not_available() {
        let view = build_view_model(&testland());

        assert!(view.capital.is_empty());
        assert_eq!(view.capital_display(), "N/A");
        assert_eq!(view.top_level_domains_display(), "N/A");
        assert_eq!(view.languages_display, "");
        assert_eq!(view.currencies_display, "");
    }

    #[test]
    fn present_lists_are_comma_joined() {
        let mut raw = testland();
        raw.capital = Some(vec!["Pretoria".to_string(), "Cape Town".to_string()]);
        raw.tld = Some(vec![".tl".to_string()]);

        let view = build_view_model(&raw);

        assert_eq!(view.capital_display(), "Pretoria, Cape Town");
        assert_eq!(view.top_level_domains_display(), ".tl");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(build_view_model(&testland())).unwrap();

        assert_eq!(value["nativeName"], serde_json::Value::Null);
        assert_eq!(value["flagUrl"], "");
        assert_eq!(value["topLevelDomains"], serde_json::json!([]));
        assert_eq!(value["borders"], serde_json::json!([]));
    }
}
