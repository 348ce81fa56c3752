use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A country record as returned by the REST Countries v3.1 API.
///
/// Only the fields needed to build a [`CountryViewModel`](super::view::CountryViewModel)
/// are modelled; everything else in the payload is ignored. Maps keep the
/// order in which keys appear in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub tld: Option<Vec<String>>,
    #[serde(default)]
    pub languages: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub currencies: Option<IndexMap<String, Currency>>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
    #[serde(default)]
    pub native_name: Option<IndexMap<String, NativeName>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NativeName {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub png: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

impl RawCountryRecord {
    /// Border codes of the record, empty when the API omits the field.
    pub fn border_codes(&self) -> &[String] {
        self.borders.as_deref().unwrap_or(&[])
    }
}
