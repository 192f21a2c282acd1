use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a canvas by id. `Ok(None)` when the page has no such element.
pub fn find_canvas(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    let Some(el) = document.get_element_by_id(element_id) else {
        return Ok(None);
    };
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", element_id, e)))?;
    Ok(Some(canvas))
}

/// Seed for the particle RNG, mixed from wall clock and `Math.random`.
pub fn entropy_seed() -> u64 {
    let now = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    now ^ (noise << 21)
}
