// crates/explorer-core/src/model.rs
use crate::error::{LoadError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw `name` object as it comes from the REST Countries payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryNameRaw {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Raw flag links. Either may be missing for disputed territories.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

/// Raw country structure from JSON.
/// NOTE: This type mirrors the external dataset; only the fields we read are
/// declared, everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRaw {
    pub cca3: String,
    pub name: CountryNameRaw,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub flags: Option<FlagsRaw>,
}

pub type CountriesRaw = Vec<CountryRaw>;

/// A country entry in the normalized dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub common_name: String,
    pub official_name: String,
    pub region: String,
    pub population: u64,
    pub capitals: Vec<String>,
    pub flag_image_url: Option<String>,
}

impl Country {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.common_name
    }

    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    /// First listed capital, the one shown on a country card.
    pub fn capital(&self) -> Option<&str> {
        self.capitals.first().map(String::as_str)
    }

    pub fn capitals(&self) -> &[String] {
        &self.capitals
    }

    pub fn flag_image_url(&self) -> Option<&str> {
        self.flag_image_url.as_deref()
    }
}

impl From<CountryRaw> for Country {
    fn from(c: CountryRaw) -> Self {
        // SVG renders crisper; PNG is the fallback some entries only carry.
        let flag_image_url = c.flags.and_then(|f| f.svg.or(f.png));
        Country {
            code: c.cca3,
            common_name: c.name.common,
            official_name: c.name.official,
            region: c.region,
            population: c.population,
            capitals: c.capital.unwrap_or_default(),
            flag_image_url,
        }
    }
}

/// The loaded country list. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    countries: Vec<Country>,
}

impl Dataset {
    /// Builds a dataset, rejecting repeated country codes.
    pub fn new(countries: Vec<Country>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(countries.len());
        for c in &countries {
            if !seen.insert(c.code.as_str()) {
                return Err(LoadError::DuplicateCode(c.code.clone()));
            }
        }
        Ok(Self { countries })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// All countries in source order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find a country by its three-letter code, case-insensitive.
    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }
}

/// Convert raw JSON records into a [`Dataset`].
pub fn build_dataset(raw: CountriesRaw) -> Result<Dataset> {
    Dataset::new(raw.into_iter().map(Country::from).collect())
}
