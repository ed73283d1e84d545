//! C ABI entry point.
//!
//! Accepts a NUL-terminated JSON request and returns a NUL-terminated JSON
//! envelope `{"status": <u16>, "body": "<response json>"}`. Returned strings
//! are owned by this library and must be released with
//! [`route_optimizer_free_string`].

use std::ffi::{CStr, CString};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use libc::c_char;

use crate::api::{handle_optimize_request, ApiResponse};
use crate::{Error, RouteOptimizer};

/// Optimizes a JSON request with the default configuration.
///
/// # Safety
///
/// `request` must be null or point to a valid NUL-terminated string that
/// stays alive for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn route_optimizer_optimize_json(request: *const c_char) -> *mut c_char {
    let response = panic::catch_unwind(AssertUnwindSafe(|| {
        if request.is_null() {
            return ApiResponse::from_error(&Error::computation("null request pointer"));
        }
        // SAFETY: non-null and NUL-terminated per this function's contract
        let raw = unsafe { CStr::from_ptr(request) };
        match raw.to_str() {
            Ok(body) => handle_optimize_request(&RouteOptimizer::default(), body),
            Err(e) => {
                ApiResponse::from_error(&Error::computation(format!("request is not UTF-8: {e}")))
            }
        }
    }))
    .unwrap_or_else(|_| ApiResponse::from_error(&Error::computation("panic at ffi boundary")));

    let Ok(envelope) = serde_json::to_string(&response) else {
        return ptr::null_mut();
    };
    CString::new(envelope)
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut())
}

/// Releases a string returned by [`route_optimizer_optimize_json`].
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by this library that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn route_optimizer_free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    // SAFETY: allocated by CString::into_raw in route_optimizer_optimize_json
    drop(unsafe { CString::from_raw(s) });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(request: &str) -> serde_json::Value {
        let input = CString::new(request).expect("no NUL");
        let out = unsafe { route_optimizer_optimize_json(input.as_ptr()) };
        assert!(!out.is_null());
        let text = unsafe { CStr::from_ptr(out) }
            .to_str()
            .expect("utf-8")
            .to_string();
        unsafe { route_optimizer_free_string(out) };
        serde_json::from_str(&text).expect("envelope")
    }

    #[test]
    fn test_ffi_success() {
        let v = call(
            r#"{"origin": {"lat": 0, "lng": 0},
                "destinations": [{"id": "a", "location": {"lat": 0, "lng": 1}}]}"#,
        );
        assert_eq!(v["status"], 200);
        let body: serde_json::Value =
            serde_json::from_str(v["body"].as_str().expect("body string")).expect("json");
        assert_eq!(body["route"][0]["id"], "a");
    }

    #[test]
    fn test_ffi_invalid_request() {
        let v = call(r#"{"origin": {"lat": 0, "lng": 0}, "destinations": []}"#);
        assert_eq!(v["status"], 400);
    }

    #[test]
    fn test_ffi_null_pointer() {
        let out = unsafe { route_optimizer_optimize_json(ptr::null()) };
        assert!(!out.is_null());
        let text = unsafe { CStr::from_ptr(out) }.to_str().expect("utf-8").to_string();
        unsafe { route_optimizer_free_string(out) };
        let v: serde_json::Value = serde_json::from_str(&text).expect("envelope");
        assert_eq!(v["status"], 500);
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe { route_optimizer_free_string(ptr::null_mut()) };
    }
}
