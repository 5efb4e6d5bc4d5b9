// ============================================================================
// CONNECT PAGE - Escaneo del QR del participante (identificación)
// ============================================================================
// decode -> puerta de throttling -> GET /user -> navegar a /name o /scan
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Toast;
use crate::hooks::{use_scanner, use_toast};
use crate::models::{ConnectedUser, User};
use crate::scan::ScanGate;
use crate::services::{ApiClient, ApiError};
use crate::utils::constants::{CONNECT_THROTTLE_MS, PAGE_FADE_IN_MS};

/// Con nombre registrado se va directo a escanear tesoros;
/// sin nombre, primero a la página de registro.
pub fn destination_for(user: &User) -> Route {
    if user.has_name() {
        Route::Scan
    } else {
        Route::Name
    }
}

#[function_component(ConnectPage)]
pub fn connect_page() -> Html {
    let navigator = use_navigator().expect("navigator disponible dentro del Router");
    let is_visible = use_state(|| false);
    let is_scanning = use_state(|| false);
    let toast = use_toast();

    // Estado que el callback de decodificación consulta entre renders
    let gate = use_mut_ref(|| ScanGate::new(CONNECT_THROTTLE_MS));

    // Registrado una sola vez en la librería JS: solo captura celdas y setters
    let on_decode = {
        let navigator = navigator.clone();
        let is_scanning = is_scanning.clone();
        let show_toast = toast.show.clone();
        let gate = gate.clone();

        Callback::from(move |decoded: String| {
            if !gate.borrow_mut().try_accept(js_sys::Date::now()) {
                log::debug!("Throttled: decodificación demasiado seguida");
                return;
            }

            is_scanning.set(true);

            let navigator = navigator.clone();
            let is_scanning = is_scanning.clone();
            let show_toast = show_toast.clone();
            spawn_local(async move {
                match ApiClient::new().get_user(&decoded).await {
                    Ok(user) => {
                        is_scanning.set(false);
                        show_toast.emit("사용자 정보를 확인했습니다!".to_string());

                        let state = ConnectedUser {
                            user_id: user.id,
                            name: user.name.clone(),
                        };
                        navigator.push_with_state(&destination_for(&user), state);
                    }
                    Err(ApiError::Server { .. }) => {
                        is_scanning.set(false);
                        show_toast.emit("유효하지 않은 QR 코드입니다.".to_string());
                    }
                    Err(err @ ApiError::Network(_)) => {
                        is_scanning.set(false);
                        show_toast.emit(err.toast_message());
                    }
                }
            });
        })
    };

    let scanner = use_scanner("qr-reader", on_decode);

    // Fade-in de entrada
    {
        let is_visible = is_visible.clone();
        use_effect_with((), move |_| {
            let timer = Timeout::new(PAGE_FADE_IN_MS, move || is_visible.set(true));
            move || drop(timer)
        });
    }

    let fade = if *is_visible { "opacity-100" } else { "opacity-0" };

    html! {
        <div class="fixed inset-0" style="background-color: #030511;">
            <div class="mx-auto h-full max-w-md flex flex-col relative" style="max-width: 430px;">
                <header class="w-full py-6 px-6 flex justify-between items-center">
                    <h2 class="text-white text-xl font-bold">{"GNTC-YOUTH-IT"}</h2>
                    if scanner.cameras.len() > 1 {
                        <button
                            onclick={scanner.switch_camera.reform(|_| ())}
                            class="bg-gray-800 text-white px-4 py-2 rounded-full text-sm flex items-center"
                        >
                            {"📷 카메라 전환"}
                        </button>
                    }
                </header>

                <main class="flex-1 flex flex-col items-center justify-center px-6">
                    <div class={format!("w-full transition-opacity duration-1000 {}", fade)}>
                        <div class="text-center mb-8">
                            <h1 class="text-3xl font-bold text-white mb-2">{"참가자 QR 스캔"}</h1>
                            <p class="text-lg text-gray-400">{"본인 확인을 위해 QR 코드를 스캔해주세요"}</p>
                        </div>

                        <div class="relative w-full aspect-square rounded-lg overflow-hidden mb-8 bg-black">
                            <div id="qr-reader" class="w-full h-full" />
                            <div class="absolute inset-0 pointer-events-none">
                                <div class="absolute inset-8 border-2 border-white/30" />
                            </div>

                            if *is_scanning {
                                <div class="absolute inset-0 bg-black/50 flex items-center justify-center">
                                    <div class="text-white text-center">
                                        <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-white mx-auto mb-3"></div>
                                        <p class="text-lg">{"스캔 중..."}</p>
                                    </div>
                                </div>
                            }
                        </div>

                        <Toast visible={*toast.visible} message={(*toast.message).clone()} />

                        if let Some(error) = scanner.error.as_ref() {
                            <div class="w-full p-4 bg-red-500/20 rounded-lg mb-4">
                                <p class="text-red-500 text-center">{ error }</p>
                            </div>
                        }
                    </div>
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_without_name_goes_to_name_entry() {
        let user: User = serde_json::from_str(r#"{"id": 7, "name": ""}"#).unwrap();
        assert_eq!(destination_for(&user), Route::Name);
        assert_eq!(user.id, 7);
    }

    #[test]
    fn user_with_name_goes_to_scan() {
        let user: User = serde_json::from_str(r#"{"id": 7, "name": "Kim"}"#).unwrap();
        assert_eq!(destination_for(&user), Route::Scan);
    }
}
