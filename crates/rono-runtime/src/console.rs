use std::ffi::c_char;
use std::ptr;

use rono_rt_console as console;

use crate::guard;
use crate::strings::{c_bytes, opt_c_string};

#[no_mangle]
pub extern "C" fn rono_print_int(value: i64) {
    guard("rono_print_int", (), || console::print_int(value))
}

#[no_mangle]
pub extern "C" fn rono_print_float(value: f64) {
    guard("rono_print_float", (), || console::print_float(value))
}

#[no_mangle]
pub extern "C" fn rono_print_bool(value: i8) {
    guard("rono_print_bool", (), || console::print_bool(value != 0))
}

#[no_mangle]
pub unsafe extern "C" fn rono_print_string(s: *const c_char) {
    guard("rono_print_string", (), || unsafe {
        console::print_str(c_bytes(s))
    })
}

/// A NULL template prints the bare value, as [`rono_print_format_int`] does.
#[no_mangle]
pub unsafe extern "C" fn rono_print_interpolated(template: *const c_char, value: i64) {
    guard("rono_print_interpolated", (), || unsafe {
        match c_bytes(template) {
            Some(template) => console::print_interpolated(template, value),
            None => console::print_int(value),
        }
    })
}

#[no_mangle]
pub unsafe extern "C" fn rono_print_format_int(template: *const c_char, value: i64) {
    guard("rono_print_format_int", (), || unsafe {
        console::print_format_int(c_bytes(template), value)
    })
}

/// NULL at end of input.
#[no_mangle]
pub extern "C" fn rono_input_string() -> *mut c_char {
    guard("rono_input_string", ptr::null_mut(), || {
        opt_c_string(console::read_line())
    })
}

#[no_mangle]
pub extern "C" fn rono_input_int() -> i64 {
    guard("rono_input_int", 0, console::read_int)
}

#[no_mangle]
pub extern "C" fn rono_input_float() -> f64 {
    guard("rono_input_float", 0.0, console::read_float)
}

#[no_mangle]
pub extern "C" fn rono_input_bool() -> i8 {
    guard("rono_input_bool", 0, || i8::from(console::read_bool()))
}
