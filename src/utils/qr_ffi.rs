// ============================================================================
// QR SCANNER FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Wrappers de las funciones JS de html5-qrcode (js/qr-scanner.js).
// Sin estado, sin lógica: la enumeración devuelve JSON que se parsea en Rust.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// Enumera las cámaras disponibles. Resuelve a un string JSON
    /// con el formato `[{"id": "...", "label": "..."}, ...]`.
    #[wasm_bindgen(js_name = listQrCameras, catch)]
    pub async fn list_qr_cameras() -> Result<JsValue, JsValue>;

    /// Arranca el escaneo continuo sobre `camera_id` dentro del contenedor.
    /// `on_decode` se invoca con el texto decodificado de cada QR leído.
    #[wasm_bindgen(js_name = startQrScanner, catch)]
    pub async fn start_qr_scanner(
        container_id: &str,
        camera_id: &str,
        fps: u32,
        qrbox: u32,
        on_decode: &js_sys::Function,
    ) -> Result<(), JsValue>;

    /// Para el stream activo. Seguro aunque nunca se haya arrancado.
    #[wasm_bindgen(js_name = stopQrScanner, catch)]
    pub async fn stop_qr_scanner() -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = isQrScannerRunning)]
    pub fn is_qr_scanner_running() -> bool;
}

/// Extrae un mensaje legible de un error JS.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string()
        .unwrap_or_else(|| format!("{:?}", err))
}
