use std::borrow::Cow;
use std::ffi::{c_char, CStr, CString};
use std::ptr;

pub(crate) unsafe fn c_bytes<'a>(ptr: *const c_char) -> Option<&'a [u8]> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_bytes())
    }
}

pub(crate) unsafe fn c_text<'a>(ptr: *const c_char) -> Option<Cow<'a, str>> {
    c_bytes(ptr).map(String::from_utf8_lossy)
}

/// Hands `bytes` to the caller as a heap C string. Anything after an
/// interior NUL is cut, which is all a C reader would see anyway.
pub(crate) fn into_c_string(mut bytes: Vec<u8>) -> *mut c_char {
    if let Some(nul) = bytes.iter().position(|&b| b == 0) {
        bytes.truncate(nul);
    }
    match CString::new(bytes) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

pub(crate) fn opt_c_string(bytes: Option<Vec<u8>>) -> *mut c_char {
    bytes.map_or(ptr::null_mut(), into_c_string)
}

/// Releases a string returned by any `rono_*` function. NULL is ignored.
#[no_mangle]
pub unsafe extern "C" fn rono_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
