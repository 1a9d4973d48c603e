//! Error macros for assay

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::AssayError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::AssayError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a lexicon during validation
#[macro_export]
macro_rules! bail_lexicon {
    ($lexicon:expr, $reason:expr) => {
        return Err($crate::error::AssayError::invalid_lexicon(
            $lexicon, $reason,
        ))
    };
}
