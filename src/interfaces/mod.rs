use crate::{metadata::NumberDescriptor, regexp_cache::InvalidRegexError};

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the given national number (a string containing only decimal
    /// digits) matches the national number pattern defined in the given
    /// descriptor. A descriptor without a pattern puts no constraint on the
    /// number.
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &NumberDescriptor,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError>;

    /// Returns whether the number matches the descriptor's possible number
    /// pattern, which older metadata uses instead of possible lengths.
    fn match_possible_number(
        &self,
        number: &str,
        number_desc: &NumberDescriptor,
    ) -> Result<bool, InvalidRegexError>;
}
