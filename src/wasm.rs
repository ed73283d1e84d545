//! WebAssembly bindings.
//!
//! Exposes `optimizeRoute(request)` taking and returning plain JS objects in
//! the same shapes as the JSON contract in [`crate::api`]. Failures reject
//! with a JS `Error` carrying only the public message.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::{optimize_request, RouteRequest};
use crate::{Error, RouteOptimizer};

#[wasm_bindgen(js_name = optimizeRoute)]
pub fn optimize_route_js(request: JsValue) -> Result<JsValue, JsValue> {
    let request: RouteRequest = serde_wasm_bindgen::from_value(request).map_err(|e| {
        log::error!("wasm: malformed request: {e}");
        js_error(&Error::computation(e.to_string()))
    })?;

    let response =
        optimize_request(&RouteOptimizer::default(), request).map_err(|e| js_error(&e))?;

    response
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| js_error(&Error::computation(e.to_string())))
}

fn js_error(e: &Error) -> JsValue {
    js_sys::Error::new(e.public_message()).into()
}
