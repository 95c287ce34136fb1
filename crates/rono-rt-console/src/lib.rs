//! Console primitives for Rono programs.
//!
//! Output writes one value per line. Input reads a bounded line and coerces
//! it with best-effort parsing; nothing here reports an error to the caller.

mod input;
mod output;

pub use input::{
    parse_bool, parse_float, parse_int, read_bool, read_bool_from, read_float, read_float_from,
    read_int, read_int_from, read_line, read_line_from, LINE_BUFFER_BYTES,
};
pub use output::{
    format_float, interpolate, print_bool, print_float, print_format_int, print_int,
    print_interpolated, print_str, write_bool, write_float, write_format_int, write_int,
    write_interpolated, write_str, NULL_TEXT,
};
