//! Browser bindings
//!
//! Thin JSON-in/JSON-out wrappers so a page script can drive its own
//! chart and orbit animation from the engine's output. Curves are kept in a
//! per-thread cache, so an animation asking for its history frame by frame
//! generates each configuration once.

use wasm_bindgen::prelude::*;

use crate::params::SimulationParameters;
use crate::sim::CurveCache;

/// Configurations kept alive between calls (one per slider position)
const CACHED_CURVES: usize = 16;

thread_local! {
    static CURVES: CurveCache = CurveCache::with_max_entries(CACHED_CURVES);
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by the host page
        return;
    }
    log::info!("Transit Sim starting...");
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_params(params_json: &str) -> Result<SimulationParameters, JsValue> {
    let params: SimulationParameters = serde_json::from_str(params_json).map_err(to_js)?;
    params.validate().map_err(to_js)?;
    Ok(params)
}

/// Generate a light curve from camelCase JSON parameters; returns the curve as JSON
#[wasm_bindgen]
pub fn generate_light_curve(params_json: &str) -> Result<String, JsValue> {
    let params = parse_params(params_json)?;
    let curve = CURVES.with(|cache| cache.get_or_generate(&params)).map_err(to_js)?;
    curve.to_json().map_err(to_js)
}

/// Curve samples up to and including `frame`, as JSON
#[wasm_bindgen]
pub fn light_curve_history(params_json: &str, frame: u32) -> Result<String, JsValue> {
    let params = parse_params(params_json)?;
    let history = CURVES.with(|cache| cache.history(&params, frame)).map_err(to_js)?;
    serde_json::to_string(&history).map_err(to_js)
}

/// Half-size of the square view that frames the orbit
#[wasm_bindgen]
pub fn view_extent(params_json: &str) -> Result<f64, JsValue> {
    Ok(parse_params(params_json)?.view_extent())
}
