use std::ffi::c_char;
use std::ptr;

use rono_rt_rand as rand;

use crate::guard;
use crate::strings::{c_text, into_c_string, opt_c_string};

#[no_mangle]
pub extern "C" fn rono_rand_init() {
    guard("rono_rand_init", (), rand::init)
}

#[no_mangle]
pub extern "C" fn rono_rand_int(min: i64, max: i64) -> i64 {
    guard("rono_rand_int", min, || rand::random_int(min, max))
}

#[no_mangle]
pub extern "C" fn rono_rand_float(min: f64, max: f64) -> f64 {
    guard("rono_rand_float", min, || rand::random_float(min, max))
}

/// An empty string for `length <= 0`; NULL when `length` bytes cannot be
/// allocated.
#[no_mangle]
pub extern "C" fn rono_rand_string(length: i64) -> *mut c_char {
    guard("rono_rand_string", ptr::null_mut(), || {
        opt_c_string(rand::random_string(length).map(String::into_bytes))
    })
}

#[no_mangle]
pub unsafe extern "C" fn rono_rand_char_range(from: *const c_char, to: *const c_char) -> *mut c_char {
    guard("rono_rand_char_range", ptr::null_mut(), || unsafe {
        let from = c_text(from);
        let to = c_text(to);
        let c = rand::random_char_in_range(from.as_deref(), to.as_deref());
        into_c_string(c.to_string().into_bytes())
    })
}
