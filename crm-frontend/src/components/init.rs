use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "export function initializeFlowbite() { \
                            if (typeof initFlowbite === 'function') { initFlowbite(); } }")]
extern "C" {
    fn initializeFlowbite();
}

/// Binds Flowbite behaviours (drawer toggles) to the `data-*` attributes
/// currently in the document.
pub fn flowbite() {
    initializeFlowbite();
}
