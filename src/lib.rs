// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod observability;
mod registry;
mod stats;
mod structure;
mod validator;

// This is the public API of the IBAN validation library
pub use checksum::{is_valid_checksum, iso13616_prepare, iso7064_mod97_10, ChecksumError};
pub use registry::{CountrySpec, Registry, RegistryError};
pub use structure::error::StructureError;
pub use structure::matcher::{compile_structure, StructureMatcher};
pub use structure::parser::parse_structure;
pub use structure::token::{CharacterClass, StructureToken};
pub use validator::{
    default_registry, validate, IbanValidator, ValidationError, ValidationVerdict,
};
