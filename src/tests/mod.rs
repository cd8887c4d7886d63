mod asyoutypeformatter_tests;
mod test_metadata;

use crate::PhoneNumberUtil;

static ONCE: std::sync::Once = std::sync::Once::new();

pub(crate) fn get_phone_util() -> PhoneNumberUtil {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    PhoneNumberUtil::new(test_metadata::test_territories()).expect("Metadata should be valid")
}
