/// Log a message at an explicit level, naming the function it is logged from.
#[macro_export]
macro_rules! log {
    ($category:expr, $level:expr, $func:expr, $($fmt:tt)+) => {
        if let Some(logger) = $crate::get_logger() {
            let site = $crate::LogSite::new(file!(), line!(), $crate::get_func_name($func), $crate::TimeStamp::now());
            logger.log_fmt($category, $level, site, format_args!($($fmt)+));
        }
    };
}

/// Log a message at an explicit level, without a function name.
#[macro_export]
macro_rules! log_anon {
    ($category:expr, $level:expr, $($fmt:tt)+) => {
        if let Some(logger) = $crate::get_logger() {
            let site = $crate::LogSite::new(file!(), line!(), "", $crate::TimeStamp::now());
            logger.log_fmt($category, $level, site, format_args!($($fmt)+));
        }
    };
}

#[macro_export]
macro_rules! log_severe {
    ($category:expr, $func:expr, $($fmt:tt)+) => { $crate::log!($category, $crate::LogLevel::Severe, $func, $($fmt)+) };
}

#[macro_export]
macro_rules! log_error {
    ($category:expr, $func:expr, $($fmt:tt)+) => { $crate::log!($category, $crate::LogLevel::Error, $func, $($fmt)+) };
}

#[macro_export]
macro_rules! log_debug {
    ($category:expr, $func:expr, $($fmt:tt)+) => { $crate::log!($category, $crate::LogLevel::Debug, $func, $($fmt)+) };
}

#[macro_export]
macro_rules! log_warning {
    ($category:expr, $($fmt:tt)+) => { $crate::log_anon!($category, $crate::LogLevel::Warning, $($fmt)+) };
}

#[macro_export]
macro_rules! log_info {
    ($category:expr, $($fmt:tt)+) => { $crate::log_anon!($category, $crate::LogLevel::Info, $($fmt)+) };
}

#[macro_export]
macro_rules! log_verbose {
    ($category:expr, $($fmt:tt)+) => { $crate::log_anon!($category, $crate::LogLevel::Verbose, $($fmt)+) };
}
