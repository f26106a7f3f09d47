use crate::checksum::IBAN_PREFIX_LENGTH;
use crate::structure::error::StructureError;
use crate::structure::matcher::{compile_structure, StructureMatcher};
use crate::validator::check_entry;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Country code, IBAN length, BBAN structure, example IBAN
const BUILTIN_SPECS: &[(&str, usize, &str, &str)] = &[
    ("BE", 16, "F03F07F02", "BE68539007547034"),
    ("NL", 18, "U04F10", "NL91ABNA0417164300"),
];

/// The BBAN layout of one country at one IBAN length.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CountrySpec {
    pub country_code: String,
    pub length: usize,
    pub structure: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl CountrySpec {
    pub fn new(country_code: &str, length: usize, structure: &str) -> Self {
        Self {
            country_code: country_code.to_owned(),
            length,
            structure: structure.to_owned(),
            example: None,
        }
    }

    pub fn example(&self, example: &str) -> Self {
        Self {
            example: Some(example.to_owned()),
            ..self.clone()
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("'{country_code}' is not a 2-letter uppercase country code")]
    InvalidCountryCode { country_code: String },

    #[error("{country_code} is registered more than once with length {length}")]
    DuplicateEntry { country_code: String, length: usize },

    #[error("the structure of {country_code} is malformed")]
    MalformedSpecification {
        country_code: String,
        #[source]
        source: StructureError,
    },

    #[error("{country_code} has length {length} but its structure describes a {bban_length} character BBAN")]
    LengthMismatch {
        country_code: String,
        length: usize,
        bban_length: usize,
    },

    #[error("the example '{example}' of {country_code} does not validate")]
    InvalidExample {
        country_code: String,
        example: String,
    },

    #[error("the registry could not be read: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub(crate) struct RegistryEntry {
    pub spec: CountrySpec,
    pub matcher: StructureMatcher,
}

/// The set of known country specifications. Every entry has been compiled and checked when
/// the registry is created, and nothing changes afterwards.
#[derive(Clone, Debug)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new(specs: Vec<CountrySpec>) -> Result<Self, RegistryError> {
        let mut keys = AHashSet::new();
        let mut entries = Vec::with_capacity(specs.len());

        for spec in specs {
            if !is_country_code(&spec.country_code) {
                return Err(RegistryError::InvalidCountryCode {
                    country_code: spec.country_code,
                });
            }
            if !keys.insert((spec.country_code.clone(), spec.length)) {
                return Err(RegistryError::DuplicateEntry {
                    country_code: spec.country_code,
                    length: spec.length,
                });
            }

            let matcher = match compile_structure(&spec.structure) {
                Ok(matcher) => matcher,
                Err(source) => {
                    return Err(RegistryError::MalformedSpecification {
                        country_code: spec.country_code,
                        source,
                    })
                }
            };
            if matcher.bban_length() + IBAN_PREFIX_LENGTH != spec.length {
                return Err(RegistryError::LengthMismatch {
                    bban_length: matcher.bban_length(),
                    country_code: spec.country_code,
                    length: spec.length,
                });
            }

            let entry = RegistryEntry { spec, matcher };
            if let Some(example) = &entry.spec.example {
                if !is_valid_example(&entry, example) {
                    return Err(RegistryError::InvalidExample {
                        country_code: entry.spec.country_code.clone(),
                        example: example.clone(),
                    });
                }
            }
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Reads a JSON array of [CountrySpec].
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let specs: Vec<CountrySpec> = serde_json::from_str(json)?;
        Self::new(specs)
    }

    /// The registry shipped with the crate.
    ///
    /// # Panics
    ///
    /// If the static table is malformed. That is a bug in this crate, not in the caller.
    pub fn builtin() -> Self {
        let specs = BUILTIN_SPECS
            .iter()
            .map(|(country_code, length, structure, example)| {
                CountrySpec::new(country_code, *length, structure).example(example)
            })
            .collect();
        match Self::new(specs) {
            Ok(registry) => registry,
            Err(err) => panic!("the built-in IBAN registry is malformed: {err}"),
        }
    }

    /// Finds the spec registered for exactly this country code and IBAN length. A country
    /// registered at another length is not a match.
    pub fn lookup(&self, country_code: &str, length: usize) -> Option<&CountrySpec> {
        self.entry(country_code, length).map(|entry| &entry.spec)
    }

    pub(crate) fn entry(&self, country_code: &str, length: usize) -> Option<&RegistryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.spec.country_code == country_code && entry.spec.length == length)
    }

    /// All specs, in registration order.
    pub fn specs(&self) -> impl Iterator<Item = &CountrySpec> {
        self.entries.iter().map(|entry| &entry.spec)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_country_code(country_code: &str) -> bool {
    country_code.len() == 2 && country_code.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_valid_example(entry: &RegistryEntry, example: &str) -> bool {
    let same_country = example
        .get(..2)
        .is_some_and(|code| code.eq_ignore_ascii_case(&entry.spec.country_code));
    same_country
        && example.chars().count() == entry.spec.length
        && matches!(check_entry(entry, example), Ok(None))
}
