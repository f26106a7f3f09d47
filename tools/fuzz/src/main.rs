use afl::fuzz;
use dd_iban::{default_registry, validate, ValidationVerdict};
use iban::Iban;

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    let verdict = validate(input);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Verdict: {:?}", verdict);
    }

    assert_eq!(verdict, validate(input));

    let length = input.chars().count();
    if length < 4 {
        assert_eq!(verdict, ValidationVerdict::MalformedInput);
        return;
    }

    if verdict == ValidationVerdict::Valid {
        let country_code = input[..2].to_ascii_uppercase();
        assert!(default_registry().lookup(&country_code, length).is_some());

        // With numeric check digits, anything valid here must also be a valid IBAN for the
        // `iban_validate` crate. Letters in the check digits are transliterated here but
        // rejected there.
        if input[2..4].bytes().all(|b| b.is_ascii_digit()) {
            assert!(
                input.to_ascii_uppercase().parse::<Iban>().is_ok(),
                "{input} is not a valid IBAN"
            );
        }
    }
}
