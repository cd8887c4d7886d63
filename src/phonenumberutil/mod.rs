pub(crate) mod helper_constants;
mod helper_functions;
pub(crate) mod helper_types;
pub(crate) mod format_template;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
pub mod territory_index;
mod phone_number_regexps_and_mappings;

pub use enums::{
    FormatIntent, LengthContext, NumberLengthType, NumberValidity, PhoneNumberFormat,
    PhoneNumberType,
};
pub use helper_types::StrippedNationalNumber;
pub use phonenumberutil::PhoneNumberUtil;
pub use territory_index::TerritoryIndex;
