use dd_iban::{
    compile_structure, default_registry, parse_structure, validate, CountrySpec, IbanValidator,
    Registry, RegistryError, ValidationVerdict,
};
use iban::Iban;
use rayon::prelude::*;

#[test]
fn reference_verdicts() {
    let cases = [
        ("BE26068900994429", ValidationVerdict::Valid),
        ("NL91ABNA0417164300", ValidationVerdict::Valid),
        ("BE26068900991429", ValidationVerdict::Invalid),
        ("NL91ABNA0417162300", ValidationVerdict::Invalid),
        ("BEF4068900994429", ValidationVerdict::Valid),
        ("BE2!068900994429", ValidationVerdict::Invalid),
        ("ZZ00", ValidationVerdict::CountryUnknown),
        ("", ValidationVerdict::MalformedInput),
        ("NL9", ValidationVerdict::MalformedInput),
    ];
    for (iban, expected) in cases {
        assert_eq!(validate(iban), expected, "{iban}");
    }
}

#[test]
fn agrees_with_iban_validate_on_registered_countries() {
    let ibans = [
        "BE26068900994429",
        "BE68539007547034",
        "BE26068900991429",
        "BE27068900994429",
        "NL91ABNA0417164300",
        "NL91ABNA0417162300",
        "NL92ABNA0417164300",
    ];
    for iban in ibans {
        let expected = iban.parse::<Iban>().is_ok();
        assert_eq!(
            validate(iban) == ValidationVerdict::Valid,
            expected,
            "{iban}"
        );
    }
}

#[test]
fn every_registered_structure_covers_the_bban() {
    for spec in default_registry().specs() {
        let tokens = parse_structure(&spec.structure).unwrap();
        let total: usize = tokens.iter().map(|token| token.repeat_count).sum();
        assert_eq!(total, spec.length - 4);
        assert_eq!(
            compile_structure(&spec.structure).unwrap().bban_length(),
            total
        );
    }
}

#[test]
fn concurrent_readers_share_the_registry() {
    let ibans: Vec<String> = (0..1_000)
        .map(|i| {
            if i % 2 == 0 {
                "BE26068900994429".to_string()
            } else {
                "NL91ABNA0417162300".to_string()
            }
        })
        .collect();

    let verdicts: Vec<ValidationVerdict> = ibans.par_iter().map(|iban| validate(iban)).collect();
    for (i, verdict) in verdicts.into_iter().enumerate() {
        let expected = if i % 2 == 0 {
            ValidationVerdict::Valid
        } else {
            ValidationVerdict::Invalid
        };
        assert_eq!(verdict, expected);
    }
}

#[test]
fn registry_loaded_from_json() {
    let registry = Registry::from_json(
        r#"[
            {"country_code": "DE", "length": 22, "structure": "F08F10", "example": "DE89370400440532013000"},
            {"country_code": "GB", "length": 22, "structure": "U04F06F08", "example": "GB29NWBK60161331926819"}
        ]"#,
    )
    .unwrap();
    let validator = IbanValidator::new(registry);

    assert_eq!(
        validator.validate("DE89370400440532013000"),
        Ok(ValidationVerdict::Valid)
    );
    assert_eq!(
        validator.validate("GB29NWBK60161331926819"),
        Ok(ValidationVerdict::Valid)
    );
    assert_eq!(
        validator.validate("GB29NWBK6016133192681X"),
        Ok(ValidationVerdict::Invalid)
    );
    assert_eq!(
        validator.validate("BE26068900994429"),
        Ok(ValidationVerdict::CountryUnknown)
    );
}

#[test]
fn lowercase_classes_from_a_custom_registry() {
    let registry = Registry::new(vec![CountrySpec::new("XX", 10, "L03W03")]).unwrap();
    let validator = IbanValidator::new(registry);

    // the checksum is computed over the uppercased IBAN
    let body = "abc1d2";
    let iban = (0..100)
        .map(|value| format!("XX{value:02}{body}"))
        .find(|iban| dd_iban::is_valid_checksum(iban) == Ok(true))
        .unwrap();
    assert_eq!(validator.validate(&iban), Ok(ValidationVerdict::Valid));
    // the same account in uppercase breaks the lowercase-only classes
    assert_eq!(
        validator.validate(&iban.to_ascii_uppercase()),
        Ok(ValidationVerdict::Invalid)
    );
}

#[test]
fn invalid_registries_are_rejected() {
    assert!(matches!(
        Registry::new(vec![CountrySpec::new("BE", 16, "F03F07F0")]),
        Err(RegistryError::MalformedSpecification { .. })
    ));
    assert!(matches!(
        Registry::new(vec![
            CountrySpec::new("NL", 18, "U04F10"),
            CountrySpec::new("NL", 18, "B14"),
        ]),
        Err(RegistryError::DuplicateEntry { .. })
    ));
}
