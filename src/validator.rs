use crate::checksum::{is_valid_checksum, ChecksumError, IBAN_PREFIX_LENGTH};
use crate::observability::ValidatorMetrics;
use crate::registry::{Registry, RegistryEntry};
use crate::stats::GLOBAL_STATS;
use lazy_static::lazy_static;
use metrics::Label;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use thiserror::Error;

const COUNTRY_CODE_LENGTH: usize = 2;

lazy_static! {
    static ref DEFAULT_VALIDATOR: IbanValidator = IbanValidator::new(Registry::builtin());
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ValidationVerdict {
    Valid,
    /// The country is known but the BBAN structure, the check digits or the checksum is wrong
    Invalid,
    /// Nothing is registered for this country code at this length
    CountryUnknown,
    /// Too short to hold a country code and check digits
    MalformedInput,
}

/// Why a registered IBAN was found invalid. Only reported through metrics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum InvalidReason {
    Structure,
    CheckDigits,
    Checksum,
}

/// A broken internal invariant. An IBAN the caller got wrong is a [ValidationVerdict], never
/// one of these.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ValidationError {
    #[error("the checksum input is malformed: {0}")]
    MalformedNumeral(#[from] ChecksumError),
}

pub struct IbanValidator {
    registry: Registry,
    metrics: ValidatorMetrics,
}

impl IbanValidator {
    pub fn new(registry: Registry) -> Self {
        Self::with_labels(registry, &[])
    }

    /// Same as [IbanValidator::new], with extra labels on every metric this validator emits.
    pub fn with_labels(registry: Registry, labels: &[Label]) -> Self {
        GLOBAL_STATS.validator_creations.increment(1);
        GLOBAL_STATS.registry_size.record(registry.len() as f64);

        Self {
            registry,
            metrics: ValidatorMetrics::new(labels),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn validate(&self, iban: &str) -> Result<ValidationVerdict, ValidationError> {
        let verdict = self.evaluate(iban)?;
        self.metrics.record_verdict(verdict);
        Ok(verdict)
    }

    fn evaluate(&self, iban: &str) -> Result<ValidationVerdict, ValidationError> {
        let length = iban.chars().count();
        if length < IBAN_PREFIX_LENGTH {
            return Ok(ValidationVerdict::MalformedInput);
        }

        let country_code: String = iban
            .chars()
            .take(COUNTRY_CODE_LENGTH)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let Some(entry) = self.registry.entry(&country_code, length) else {
            return Ok(ValidationVerdict::CountryUnknown);
        };

        // Letters in the check digits are transliterated like the rest of the IBAN, anything
        // else would reach the checksum as a malformed numeral.
        let alphanumeric_check_digits = iban
            .chars()
            .skip(COUNTRY_CODE_LENGTH)
            .take(IBAN_PREFIX_LENGTH - COUNTRY_CODE_LENGTH)
            .all(|c| c.is_ascii_alphanumeric());
        if !alphanumeric_check_digits {
            self.metrics.record_invalid(InvalidReason::CheckDigits);
            return Ok(ValidationVerdict::Invalid);
        }

        match check_entry(entry, iban)? {
            None => Ok(ValidationVerdict::Valid),
            Some(reason) => {
                self.metrics.record_invalid(reason);
                Ok(ValidationVerdict::Invalid)
            }
        }
    }
}

/// Checks an IBAN against the entry registered for its country and length. Returns the
/// first check that failed, or `None` if the IBAN is valid.
pub(crate) fn check_entry(
    entry: &RegistryEntry,
    iban: &str,
) -> Result<Option<InvalidReason>, ChecksumError> {
    let bban = iban
        .char_indices()
        .nth(IBAN_PREFIX_LENGTH)
        .map_or("", |(index, _)| &iban[index..]);
    if !entry.matcher.is_match(bban) {
        return Ok(Some(InvalidReason::Structure));
    }

    if !is_valid_checksum(iban)? {
        return Ok(Some(InvalidReason::Checksum));
    }
    Ok(None)
}

/// Validates an IBAN against the built-in registry.
///
/// The built-in structures only admit ASCII letters and digits and the check digits are
/// verified before the checksum runs, so the checksum input is always numeric once
/// transliterated.
pub fn validate(iban: &str) -> ValidationVerdict {
    match DEFAULT_VALIDATOR.validate(iban) {
        Ok(verdict) => verdict,
        Err(err) => unreachable!("built-in registry produced a broken checksum input: {err}"),
    }
}

/// The registry used by [validate].
pub fn default_registry() -> &'static Registry {
    DEFAULT_VALIDATOR.registry()
}
