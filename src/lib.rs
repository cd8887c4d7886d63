mod asyoutypeformatter;
mod interfaces;
mod phonenumberutil;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
/// Plain record types a metadata loader fills in.
pub mod metadata;

pub use asyoutypeformatter::{AsYouTypeFormatter, FormatterState};
pub use phonenumberutil::{
    FormatIntent, LengthContext, NumberLengthType, NumberValidity, PhoneNumberFormat,
    PhoneNumberType, PhoneNumberUtil, StrippedNationalNumber, TerritoryIndex,
    errors::{
        DuplicateRegionError, InvalidLengthSpecError, InvalidRegexError, MetadataError,
        ValidationError,
    },
    phonenumberutil::Result,
};
pub use regexp_cache::{CompiledPattern, RegexCache};

#[cfg(test)]
mod tests;
