use std::ffi::{c_char, CStr, CString};
use std::io::{Read as _, Write as _};
use std::net::TcpListener;
use std::ptr;
use std::time::Duration;

use rono_runtime::*;

/// Copies a returned string out and frees it.
fn take(ptr: *mut c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let out = unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned();
    unsafe { rono_string_free(ptr) };
    Some(out)
}

fn serve_once(body: &'static str) -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind");
    let addr = listener.local_addr().expect("local_addr");
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let _ = stream.set_read_timeout(Some(Duration::from_millis(500)));
        let mut buf = Vec::new();
        let mut tmp = [0u8; 4096];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut tmp) {
                Ok(0) | Err(_) => break,
                Ok(n) => buf.extend_from_slice(&tmp[..n]),
            }
        }
        let resp = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).expect("write response");
    });
    format!("http://{addr}/")
}

#[test]
fn rand_int_handles_swapped_and_equal_bounds() {
    rono_rand_init();
    rono_rand_init();
    for _ in 0..200 {
        let v = rono_rand_int(10, 1);
        assert!((1..=10).contains(&v));
        assert_eq!(rono_rand_int(-4, -4), -4);
        let f = rono_rand_float(1.0, 0.0);
        assert!((0.0..1.0).contains(&f));
    }
}

#[test]
fn rand_string_has_requested_length() {
    assert_eq!(take(rono_rand_string(0)).as_deref(), Some(""));
    assert_eq!(take(rono_rand_string(-1)).as_deref(), Some(""));
    let s = take(rono_rand_string(16)).expect("string");
    assert_eq!(s.len(), 16);
    assert!(s.bytes().all(|b| b.is_ascii_alphanumeric()));
}

#[test]
fn rand_string_too_large_is_null() {
    assert!(rono_rand_string(i64::MAX).is_null());
    assert!(rono_rand_string(i64::MAX / 2 + 1).is_null());
}

#[test]
fn rand_char_range_from_c_strings() {
    let a = CString::new("a").unwrap();
    let z = CString::new("zulu").unwrap();
    let empty = CString::new("").unwrap();
    unsafe {
        for _ in 0..100 {
            let c = take(rono_rand_char_range(z.as_ptr(), a.as_ptr())).expect("char");
            assert_eq!(c.chars().count(), 1);
            assert!(c.chars().all(|c| c.is_ascii_lowercase()), "{c}");
        }
        assert_eq!(take(rono_rand_char_range(ptr::null(), z.as_ptr())).as_deref(), Some("a"));
        assert_eq!(take(rono_rand_char_range(empty.as_ptr(), z.as_ptr())).as_deref(), Some("a"));
    }
}

#[test]
fn http_get_returns_owned_body() {
    rono_http_init();
    let url = CString::new(serve_once("ok")).unwrap();
    let body = take(unsafe { rono_http_get(url.as_ptr()) });
    assert_eq!(body.as_deref(), Some("ok"));
}

#[test]
fn http_post_with_null_body_sends_empty_payload() {
    let url = CString::new(serve_once("posted")).unwrap();
    let body = take(unsafe { rono_http_post(url.as_ptr(), ptr::null()) });
    assert_eq!(body.as_deref(), Some("posted"));
}

#[test]
fn http_failures_return_null() {
    let refused = {
        let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind");
        let addr = listener.local_addr().expect("local_addr");
        CString::new(format!("http://{addr}/")).unwrap()
    };
    let data = CString::new("x").unwrap();
    unsafe {
        assert!(rono_http_get(ptr::null()).is_null());
        assert!(rono_http_delete(refused.as_ptr()).is_null());
        assert!(rono_http_put(refused.as_ptr(), data.as_ptr()).is_null());
    }
}

#[test]
fn printing_null_pointers_does_not_crash() {
    unsafe {
        rono_print_string(ptr::null());
        rono_print_format_int(ptr::null(), 3);
        rono_print_interpolated(ptr::null(), 3);
    }
    rono_print_bool(2);
    rono_print_float(0.5);
    rono_print_int(-1);
}
