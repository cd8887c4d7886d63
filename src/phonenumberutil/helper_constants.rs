pub const NANPA_COUNTRY_CODE: u32 = 1;

/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

pub const PLUS_SIGN: &str = "+";
pub const RFC3966_EXTN_PREFIX: &str = ";ext=";
pub const RFC3966_PREFIX: &str = "tel:";

// Regular expression of acceptable punctuation found in phone numbers. This
// consists of dash characters, white space characters, full stops, slashes,
// square brackets, parentheses and tildes. Full-width variants are also
// present.
pub const VALID_PUNCTUATION: &str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";

// A single international prefix is a sequence of ASCII digits, possibly
// containing a tilde which signals waiting for the tone. Anything else in
// the metadata is a pattern covering several prefixes.
pub const SINGLE_INTERNATIONAL_PREFIX: &str = "[\\d]+(?:[~\u{2053}\u{223C}\u{FF5E}][\\d]+)?";

// Default extension prefix to use when formatting. This will be put in front of
// any extension component of the number, after the main national number is
// formatted. This can be overridden by region-specific preferences.
pub const DEFAULT_EXTN_PREFIX: &str = " ext. ";

/// International template marking a format rule as unusable for
/// international formatting.
pub const INTL_FORMAT_NOT_APPLICABLE: &str = "NA";

// Tokens of the template mini-language used by format rules.
pub const NATIONAL_PREFIX_TOKEN: &str = "$NP";
pub const FIRST_GROUP_TOKEN: &str = "$FG";
pub const CARRIER_CODE_TOKEN: &str = "$CC";
