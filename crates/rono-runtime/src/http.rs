use std::ffi::c_char;
use std::ptr;

use rono_rt_http as http;

use crate::guard;
use crate::strings::{c_bytes, opt_c_string};

/// A URL that is NULL or not UTF-8 fails like any other transport error.
unsafe fn url_arg<'a>(url: *const c_char) -> Option<&'a str> {
    std::str::from_utf8(c_bytes(url)?).ok()
}

#[no_mangle]
pub extern "C" fn rono_http_init() {
    guard("rono_http_init", (), || {
        http::init();
    })
}

#[no_mangle]
pub unsafe extern "C" fn rono_http_get(url: *const c_char) -> *mut c_char {
    guard("rono_http_get", ptr::null_mut(), || unsafe {
        opt_c_string(url_arg(url).and_then(http::http_get))
    })
}

/// A NULL body is sent as an empty payload.
#[no_mangle]
pub unsafe extern "C" fn rono_http_post(url: *const c_char, body: *const c_char) -> *mut c_char {
    guard("rono_http_post", ptr::null_mut(), || unsafe {
        let body = c_bytes(body).unwrap_or_default();
        opt_c_string(url_arg(url).and_then(|url| http::http_post(url, body)))
    })
}

#[no_mangle]
pub unsafe extern "C" fn rono_http_put(url: *const c_char, body: *const c_char) -> *mut c_char {
    guard("rono_http_put", ptr::null_mut(), || unsafe {
        let body = c_bytes(body).unwrap_or_default();
        opt_c_string(url_arg(url).and_then(|url| http::http_put(url, body)))
    })
}

#[no_mangle]
pub unsafe extern "C" fn rono_http_delete(url: *const c_char) -> *mut c_char {
    guard("rono_http_delete", ptr::null_mut(), || unsafe {
        opt_c_string(url_arg(url).and_then(http::http_delete))
    })
}
