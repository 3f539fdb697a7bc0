// Build progress output, compiled in with the `report` feature only
#[cfg(feature = "report")]
macro_rules! report {
    ($($arg:tt)*) => {{
        println!($($arg)*);
    }};
}

#[cfg(not(feature = "report"))]
macro_rules! report {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub(crate) use report;
