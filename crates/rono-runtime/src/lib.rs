//! C ABI linked into every executable the Rono compiler produces.
//!
//! Symbol names and signatures are fixed by the compiler's imports. Strings
//! cross the boundary as NUL-terminated `char*`; every string this library
//! returns is owned by the caller and released with [`rono_string_free`].
//! A NULL return is the only failure signal.

#![allow(clippy::missing_safety_doc)]

use std::panic::{catch_unwind, UnwindSafe};

mod console;
mod http;
mod random;
mod strings;

pub use console::*;
pub use http::*;
pub use random::*;
pub use strings::rono_string_free;

/// Runs `f`, turning a panic into `fallback` so no unwind reaches C frames.
fn guard<T>(symbol: &'static str, fallback: T, f: impl FnOnce() -> T + UnwindSafe) -> T {
    catch_unwind(f).unwrap_or_else(|_| {
        tracing::error!(symbol, "panic caught at runtime boundary");
        fallback
    })
}
