use crate::validator::{InvalidReason, ValidationVerdict};
use metrics::{counter, Counter, Label};

const VERDICT: &str = "verdict";
const REASON: &str = "reason";

/// Counters owned by a single [crate::IbanValidator]. Every counter carries the labels the
/// validator was created with.
pub(crate) struct ValidatorMetrics {
    pub valid: Counter,
    pub invalid: Counter,
    pub country_unknown: Counter,
    pub malformed_input: Counter,

    pub invalid_structure: Counter,
    pub invalid_check_digits: Counter,
    pub invalid_checksum: Counter,
}

impl ValidatorMetrics {
    pub(crate) fn new(labels: &[Label]) -> Self {
        let verdict = |verdict: ValidationVerdict| {
            counter!(
                "iban.validations",
                with_label(labels, VERDICT, verdict.into())
            )
        };
        let invalid = |reason: InvalidReason| {
            counter!("iban.invalid", with_label(labels, REASON, reason.into()))
        };

        ValidatorMetrics {
            valid: verdict(ValidationVerdict::Valid),
            invalid: verdict(ValidationVerdict::Invalid),
            country_unknown: verdict(ValidationVerdict::CountryUnknown),
            malformed_input: verdict(ValidationVerdict::MalformedInput),
            invalid_structure: invalid(InvalidReason::Structure),
            invalid_check_digits: invalid(InvalidReason::CheckDigits),
            invalid_checksum: invalid(InvalidReason::Checksum),
        }
    }

    pub(crate) fn record_verdict(&self, verdict: ValidationVerdict) {
        match verdict {
            ValidationVerdict::Valid => self.valid.increment(1),
            ValidationVerdict::Invalid => self.invalid.increment(1),
            ValidationVerdict::CountryUnknown => self.country_unknown.increment(1),
            ValidationVerdict::MalformedInput => self.malformed_input.increment(1),
        }
    }

    pub(crate) fn record_invalid(&self, reason: InvalidReason) {
        match reason {
            InvalidReason::Structure => self.invalid_structure.increment(1),
            InvalidReason::CheckDigits => self.invalid_check_digits.increment(1),
            InvalidReason::Checksum => self.invalid_checksum.increment(1),
        }
    }
}

fn with_label(labels: &[Label], key: &'static str, value: &'static str) -> Vec<Label> {
    let mut labels = labels.to_vec();
    labels.push(Label::new(key, value));
    labels
}
