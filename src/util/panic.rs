/// Asserts that a block panics. When an expected message is given, the panic payload must also
/// render to exactly that text, which lets tests check that a panicking method reports the same
/// error as its `try_` counterpart.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $expected:expr) => {{
        let payload = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => payload,
        };
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert_eq!(message, $expected.to_string(), "panic message should match the error");
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
