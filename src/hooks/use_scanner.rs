use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::scan::{find_rear_camera, next_camera, CameraDevice};
use crate::utils::constants::{SCANNER_FPS, SCANNER_QRBOX};
use crate::utils::qr_ffi::{
    is_qr_scanner_running, js_error_message, list_qr_cameras, start_qr_scanner, stop_qr_scanner,
};

type DecodeClosure = Closure<dyn FnMut(String)>;

/// Ciclo de vida de la cámara de una página de escaneo.
///
/// Al montar: enumera cámaras, elige la trasera por defecto y arranca el
/// escaneo continuo. Al desmontar: para el stream y solo después suelta el
/// closure de decodificación, para que un callback tardío no golpee memoria
/// liberada. Exactamente un stream de hardware abierto por sesión.
///
/// `on_decode` se registra UNA vez en la librería JS y vive todos los renders:
/// debe capturar solo setters y celdas `Rc<RefCell<...>>`, nunca leer valores
/// de `use_state` (serían snapshots del primer render).
pub struct UseScannerHandle {
    pub cameras: UseStateHandle<Vec<CameraDevice>>,
    pub current_camera: UseStateHandle<Option<String>>,
    pub error: UseStateHandle<Option<String>>,
    pub switch_camera: Callback<()>,
}

#[hook]
pub fn use_scanner(container_id: &'static str, on_decode: Callback<String>) -> UseScannerHandle {
    let cameras = use_state(Vec::<CameraDevice>::new);
    let current_camera = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    // El closure debe sobrevivir mientras la librería JS pueda invocarlo
    let decode_closure = use_mut_ref(|| None::<DecodeClosure>);

    // Inicialización al montar + teardown al desmontar
    {
        let cameras = cameras.clone();
        let current_camera = current_camera.clone();
        let error = error.clone();
        let decode_closure = decode_closure.clone();

        use_effect_with((), move |_| {
            let callback = Closure::wrap(Box::new(move |decoded: String| {
                on_decode.emit(decoded);
            }) as Box<dyn FnMut(String)>);
            *decode_closure.borrow_mut() = Some(callback);

            {
                let decode_closure = decode_closure.clone();
                spawn_local(async move {
                    match initialize(container_id, &decode_closure).await {
                        Ok((devices, selected)) => {
                            log::info!("📷 Scanner iniciado con cámara {}", selected);
                            current_camera.set(Some(selected));
                            cameras.set(devices);
                            error.set(None);
                        }
                        Err(msg) => {
                            log::error!("❌ Error iniciando scanner: {}", msg);
                            error.set(Some(msg));
                        }
                    }
                });
            }

            let decode_closure = decode_closure.clone();
            move || {
                // Liberar la cámara de forma determinista; el closure se
                // suelta después del stop para no dejar un puntero colgando
                spawn_local(async move {
                    if is_qr_scanner_running() {
                        if let Err(e) = stop_qr_scanner().await {
                            log::error!("❌ Error parando scanner: {}", js_error_message(&e));
                        }
                    }
                    decode_closure.borrow_mut().take();
                });
            }
        });
    }

    // Cambiar a la siguiente cámara en orden de enumeración (round-robin).
    // Con menos de dos cámaras es un no-op; un fallo se muestra como error
    // pero no tumba la sesión.
    let switch_camera = {
        let cameras = cameras.clone();
        let current_camera = current_camera.clone();
        let error = error.clone();
        let decode_closure = decode_closure.clone();

        Callback::from(move |_| {
            let devices = (*cameras).clone();
            let current_id = (*current_camera).clone();
            let next = match next_camera(&devices, current_id.as_deref()) {
                Some(camera) => camera.clone(),
                None => return,
            };

            let current_camera = current_camera.clone();
            let error = error.clone();
            let decode_closure = decode_closure.clone();
            spawn_local(async move {
                if is_qr_scanner_running() {
                    if let Err(e) = stop_qr_scanner().await {
                        error.set(Some(format!("카메라 전환 실패: {}", js_error_message(&e))));
                        return;
                    }
                }

                let callback = match decode_function(&decode_closure) {
                    Some(f) => f,
                    None => return, // la página ya se desmontó
                };

                match start_qr_scanner(
                    container_id,
                    &next.id,
                    SCANNER_FPS,
                    SCANNER_QRBOX,
                    &callback,
                )
                .await
                {
                    Ok(()) => {
                        log::info!("📷 Cámara cambiada a {}", next.id);
                        current_camera.set(Some(next.id));
                    }
                    Err(e) => {
                        error.set(Some(format!("카메라 전환 실패: {}", js_error_message(&e))));
                    }
                }
            });
        })
    };

    UseScannerHandle {
        cameras,
        current_camera,
        error,
        switch_camera,
    }
}

/// Enumerar, elegir cámara por defecto y arrancar el stream.
/// Cualquier fallo deja la sesión inactiva con un mensaje descriptivo.
async fn initialize(
    container_id: &str,
    decode_closure: &Rc<RefCell<Option<DecodeClosure>>>,
) -> Result<(Vec<CameraDevice>, String), String> {
    let raw = list_qr_cameras()
        .await
        .map_err(|e| js_error_message(&e))?;
    let json = raw
        .as_string()
        .ok_or_else(|| "respuesta inesperada al enumerar cámaras".to_string())?;
    let devices: Vec<CameraDevice> =
        serde_json::from_str(&json).map_err(|e| format!("parse error: {}", e))?;

    if devices.is_empty() {
        return Err("사용 가능한 카메라가 없습니다.".to_string());
    }

    // find_rear_camera nunca devuelve None con lista no vacía
    let selected = find_rear_camera(&devices)
        .map(|camera| camera.id.clone())
        .ok_or_else(|| "사용 가능한 카메라가 없습니다.".to_string())?;

    let callback = decode_function(decode_closure)
        .ok_or_else(|| "scanner ya liberado".to_string())?;

    start_qr_scanner(container_id, &selected, SCANNER_FPS, SCANNER_QRBOX, &callback)
        .await
        .map_err(|e| js_error_message(&e))?;

    Ok((devices, selected))
}

/// Clon del handle JS del closure, sin retener el borrow a través de awaits.
fn decode_function(cell: &Rc<RefCell<Option<DecodeClosure>>>) -> Option<js_sys::Function> {
    cell.borrow()
        .as_ref()
        .map(|closure| closure.as_ref().unchecked_ref::<js_sys::Function>().clone())
}
