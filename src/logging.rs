//! Logging abstraction
//!
//! Unified logging macros across targets:
//! - Host tests: `println!`/`eprintln!`
//! - Target (and non-test host builds): no-op that still type-checks and
//!   consumes its arguments
//!
//! There is no log transport on the board, so the target arm compiles to
//! nothing. Never log from the timer interrupt handler.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(test)]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(not(test))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(test)]
        println!("[WARN] {}", format!($($arg)*));

        #[cfg(not(test))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(test)]
        eprintln!("[ERROR] {}", format!($($arg)*));

        #[cfg(not(test))]
        let _ = ::core::format_args!($($arg)*);
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(test)]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(not(test))]
        let _ = ::core::format_args!($($arg)*);
    }};
}
