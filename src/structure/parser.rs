use super::error::StructureError;
use super::token::{CharacterClass, StructureToken};
use nom::bytes::complete::take;
use nom::character::complete::anychar;
use nom::combinator::all_consuming;
use nom::multi::many0;
use nom::IResult;

type ParseResult<'a, T> = IResult<&'a str, T, StructureError>;

const TRIPLET_LENGTH: usize = 3;

/// Splits a structure string (e.g. `F03F07F02`) into its tokens, in order.
pub fn parse_structure(structure: &str) -> Result<Vec<StructureToken>, StructureError> {
    let length = structure.chars().count();
    if length % TRIPLET_LENGTH != 0 {
        return Err(StructureError::InvalidLength { length });
    }

    let (_, tokens) = all_consuming(many0(structure_token))(structure).map_err(|err| match err {
        nom::Err::Incomplete(_) | nom::Err::Error(_) => StructureError::InvalidLength { length },
        nom::Err::Failure(x) => x,
    })?;
    Ok(tokens)
}

fn structure_token(input: &str) -> ParseResult<StructureToken> {
    let (input, letter) = anychar(input)?;
    let class = CharacterClass::from_letter(letter)
        .ok_or(nom::Err::Failure(StructureError::UnknownClass { letter }))?;

    let (input, count) = take(2usize)(input)?;
    let repeat_count = repeat_count(count).map_err(nom::Err::Failure)?;

    Ok((input, StructureToken::new(class, repeat_count)))
}

fn repeat_count(count: &str) -> Result<usize, StructureError> {
    // `str::parse` would also accept a sign, so check the digits first
    if count.chars().count() != 2 || !count.chars().all(|c| c.is_ascii_digit()) {
        return Err(StructureError::InvalidCount {
            count: count.to_string(),
        });
    }
    match count.parse::<usize>() {
        Ok(0) => Err(StructureError::ZeroCount),
        Ok(value) => Ok(value),
        Err(_) => Err(StructureError::InvalidCount {
            count: count.to_string(),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::structure::token::CharacterClass::*;

    #[test]
    fn parses_registered_structures() {
        assert_eq!(
            parse_structure("F03F07F02"),
            Ok(vec![
                StructureToken::new(Digit, 3),
                StructureToken::new(Digit, 7),
                StructureToken::new(Digit, 2),
            ])
        );
        assert_eq!(
            parse_structure("U04F10"),
            Ok(vec![
                StructureToken::new(UpperAlpha, 4),
                StructureToken::new(Digit, 10),
            ])
        );
    }

    #[test]
    fn parses_every_class_letter() {
        let tokens = parse_structure("A01B02C03F04L05U06W07").unwrap();
        let classes: Vec<_> = tokens.iter().map(|t| t.class).collect();
        assert_eq!(
            classes,
            vec![
                Alphanumeric,
                UpperAlphanumeric,
                Alpha,
                Digit,
                LowerAlpha,
                UpperAlpha,
                LowerAlphanumeric
            ]
        );
        let counts: Vec<_> = tokens.iter().map(|t| t.repeat_count).collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn empty_structure_has_no_tokens() {
        assert_eq!(parse_structure(""), Ok(vec![]));
    }

    #[test]
    fn length_must_be_a_multiple_of_three() {
        assert_eq!(
            parse_structure("F03F0"),
            Err(StructureError::InvalidLength { length: 5 })
        );
        assert_eq!(
            parse_structure("F"),
            Err(StructureError::InvalidLength { length: 1 })
        );
    }

    #[test]
    fn unknown_class_letter() {
        assert_eq!(
            parse_structure("F03X07"),
            Err(StructureError::UnknownClass { letter: 'X' })
        );
        // lowercase letters are not class letters
        assert_eq!(
            parse_structure("f03"),
            Err(StructureError::UnknownClass { letter: 'f' })
        );
        assert_eq!(
            parse_structure("é03"),
            Err(StructureError::UnknownClass { letter: 'é' })
        );
    }

    #[test]
    fn count_must_be_two_digits() {
        assert_eq!(
            parse_structure("F0x"),
            Err(StructureError::InvalidCount {
                count: "0x".to_string()
            })
        );
        assert_eq!(
            parse_structure("F+1"),
            Err(StructureError::InvalidCount {
                count: "+1".to_string()
            })
        );
        assert_eq!(
            parse_structure("F 3"),
            Err(StructureError::InvalidCount {
                count: " 3".to_string()
            })
        );
    }

    #[test]
    fn zero_count_is_rejected() {
        assert_eq!(parse_structure("F03U00"), Err(StructureError::ZeroCount));
    }
}
