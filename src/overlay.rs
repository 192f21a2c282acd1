use web_sys as web;

/// Write the smoothed frame rate into the readout element.
#[inline]
pub fn show_rate(el: &web::Element, rate: u32) {
    el.set_text_content(Some(&rate.to_string()));
}
