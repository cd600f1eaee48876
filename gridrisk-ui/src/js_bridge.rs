//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The map glue in `assets/js/risk-map.js` is embedded at compile time and
//! installed once as `window.__gridRiskMap`. It keeps the library's objects
//! in a registry and hands integer ids back to Rust.

use wasm_bindgen::JsValue;

// Embed the map glue at compile time
static RISK_MAP_JS: &str = include_str!("../assets/js/risk-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GridRisk JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Install the map glue. Safe to call more than once.
pub fn load_map_scripts() {
    call_js(RISK_MAP_JS);
}

/// Quote `s` as a JS string literal.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Evaluate an expression, turning a thrown exception into its message.
pub fn eval(code: &str) -> Result<JsValue, String> {
    js_sys::eval(code).map_err(|e| {
        js_sys::Reflect::get(&e, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| e.as_string())
            .unwrap_or_else(|| format!("{:?}", e))
    })
}

/// Evaluate an expression expected to produce a handle id.
pub fn eval_id(code: &str) -> Result<u32, String> {
    let value = eval(code)?;
    value
        .as_f64()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n as u32)
        .ok_or_else(|| format!("expected a handle id, got {:?}", value))
}

/// Evaluate an expression as a boolean; any exception counts as `false`.
pub fn eval_bool(code: &str) -> bool {
    eval(code).map(|v| v.is_truthy()).unwrap_or(false)
}
