use super::error::StructureError;
use super::parser::parse_structure;
use super::token::StructureToken;
use regex_automata::meta;

/// A compiled structure string. Matches a BBAN only if it is exactly the sequence of
/// character classes with exactly the given counts, nothing before or after.
#[derive(Clone, Debug)]
pub struct StructureMatcher {
    tokens: Vec<StructureToken>,
    regex: meta::Regex,
}

impl StructureMatcher {
    pub fn is_match(&self, bban: &str) -> bool {
        self.regex.is_match(bban)
    }

    pub fn tokens(&self) -> &[StructureToken] {
        &self.tokens
    }

    /// The number of characters a matching BBAN has.
    pub fn bban_length(&self) -> usize {
        self.tokens.iter().map(|token| token.repeat_count).sum()
    }
}

/// Compiles a structure string such as `U04F10` into a [StructureMatcher].
pub fn compile_structure(structure: &str) -> Result<StructureMatcher, StructureError> {
    let tokens = parse_structure(structure)?;
    let regex = build_regex(&tokens)?;
    Ok(StructureMatcher { tokens, regex })
}

fn build_regex(tokens: &[StructureToken]) -> Result<meta::Regex, StructureError> {
    let body: String = tokens.iter().map(|token| token.to_regex()).collect();
    let pattern = format!("^{body}$");

    meta::Builder::new()
        .syntax(
            regex_automata::util::syntax::Config::default()
                .unicode(false)
                .multi_line(false),
        )
        .build(&pattern)
        .map_err(|err| StructureError::InvalidPattern(err.to_string()))
}
