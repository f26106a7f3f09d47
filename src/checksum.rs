use thiserror::Error;

const MODULUS: u32 = 97;

// 9 digits always fit in a u32, and a carried remainder (at most 2 digits) prepended to
// what is left never pushes the next block past 9 digits.
const BLOCK_SIZE: usize = 9;

// country code + check digits
pub(crate) const IBAN_PREFIX_LENGTH: usize = 4;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ChecksumError {
    #[error("an IBAN needs at least 4 characters")]
    TooShort,

    #[error("'{numeral}' is not a decimal numeral")]
    MalformedNumeral { numeral: String },
}

/// ISO 13616 preparation: moves the country code and check digits to the end, then replaces
/// every letter with its number (`A` = 10 ... `Z` = 35). Any other character is copied as is.
pub fn iso13616_prepare(iban: &str) -> Result<String, ChecksumError> {
    let iban = iban.to_ascii_uppercase();
    let split = match iban.char_indices().nth(IBAN_PREFIX_LENGTH) {
        Some((index, _)) => index,
        None if iban.chars().count() == IBAN_PREFIX_LENGTH => iban.len(),
        None => return Err(ChecksumError::TooShort),
    };
    let (prefix, bban) = iban.split_at(split);

    let mut prepared = String::with_capacity(iban.len() * 2);
    for c in bban.chars().chain(prefix.chars()) {
        if c.is_ascii_uppercase() {
            prepared.push_str(&(c as u32 - 'A' as u32 + 10).to_string());
        } else {
            prepared.push(c);
        }
    }
    Ok(prepared)
}

/// ISO 7064 MOD 97-10 over a decimal numeral of any length, reduced block by block.
pub fn iso7064_mod97_10(numeral: &str) -> Result<u32, ChecksumError> {
    if numeral.is_empty() || !numeral.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChecksumError::MalformedNumeral {
            numeral: numeral.to_string(),
        });
    }

    let mut remainder = numeral.to_string();
    while remainder.len() > 2 {
        let (block, rest) = remainder.split_at(remainder.len().min(BLOCK_SIZE));
        remainder = format!("{}{}", parse_block(block) % MODULUS, rest);
    }
    Ok(parse_block(&remainder) % MODULUS)
}

/// Both steps over a complete IBAN. A correct IBAN reduces to exactly 1.
pub fn is_valid_checksum(iban: &str) -> Result<bool, ChecksumError> {
    let prepared = iso13616_prepare(iban)?;
    Ok(iso7064_mod97_10(&prepared)? == 1)
}

// Only called on at most `BLOCK_SIZE` ASCII digits
fn parse_block(block: &str) -> u32 {
    block
        .bytes()
        .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
}
