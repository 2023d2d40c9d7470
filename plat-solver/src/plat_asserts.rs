//! Leveled assertion macros.
//!
//! Checks are compiled in up to [`PLAT_ASSERT_LEVEL_DEFINITION`]: simple
//! checks are always active, the heavier levels only under `cfg(test)` or the
//! `debug-checks` feature.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const PLAT_ASSERT_LEVEL_DEFINITION: u8 = PLAT_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const PLAT_ASSERT_LEVEL_DEFINITION: u8 = PLAT_ASSERT_MODERATE;

pub const PLAT_ASSERT_SIMPLE: u8 = 1;
pub const PLAT_ASSERT_MODERATE: u8 = 2;
pub const PLAT_ASSERT_ADVANCED: u8 = 3;
pub const PLAT_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! plat_assert_simple {
    ($($arg:tt)*) => {
        if $crate::plat_asserts::PLAT_ASSERT_LEVEL_DEFINITION >= $crate::plat_asserts::PLAT_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! plat_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::plat_asserts::PLAT_ASSERT_LEVEL_DEFINITION >= $crate::plat_asserts::PLAT_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! plat_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::plat_asserts::PLAT_ASSERT_LEVEL_DEFINITION >= $crate::plat_asserts::PLAT_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! plat_assert_eq_moderate {
    ($($arg:tt)*) => {
        if $crate::plat_asserts::PLAT_ASSERT_LEVEL_DEFINITION >= $crate::plat_asserts::PLAT_ASSERT_MODERATE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! plat_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::plat_asserts::PLAT_ASSERT_LEVEL_DEFINITION >= $crate::plat_asserts::PLAT_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! plat_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::plat_asserts::PLAT_ASSERT_LEVEL_DEFINITION >= $crate::plat_asserts::PLAT_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
