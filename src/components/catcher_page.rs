// ============================================================================
// CATCHER PAGE - Modo 술래: escanear el QR de un participante para atraparlo
// ============================================================================
// decode -> cooldown activo? descartar -> puerta de throttling (2s)
//        -> POST /user/found -> arrancar cooldown de 15s + toast
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::Toast;
use crate::hooks::{use_cooldown, use_scanner, use_toast};
use crate::models::CaughtUser;
use crate::scan::{accept_catch, ScanGate};
use crate::services::ApiClient;
use crate::utils::constants::{CATCH_COOLDOWN_SECS, CATCH_THROTTLE_MS, PAGE_FADE_IN_MS};

#[function_component(CatcherPage)]
pub fn catcher_page() -> Html {
    let is_visible = use_state(|| false);
    let toast = use_toast();
    let cooldown = use_cooldown();
    let last_caught = use_state(|| None::<CaughtUser>);

    let gate = use_mut_ref(|| ScanGate::new(CATCH_THROTTLE_MS));

    // Registrado una sola vez en la librería JS: lee el cooldown por la celda
    // compartida, nunca por snapshots de use_state. Las dos puertas (cooldown
    // y throttling) son independientes; ambas deben pasar.
    let on_decode = {
        let show_toast = toast.show.clone();
        let cooldown_state = cooldown.state.clone();
        let start_cooldown = cooldown.start.clone();
        let last_caught = last_caught.clone();
        let gate = gate.clone();

        Callback::from(move |decoded: String| {
            if !accept_catch(
                &cooldown_state.borrow(),
                &mut gate.borrow_mut(),
                js_sys::Date::now(),
            ) {
                log::debug!("Decodificación descartada (cooldown o throttling)");
                return;
            }

            let show_toast = show_toast.clone();
            let start_cooldown = start_cooldown.clone();
            let last_caught = last_caught.clone();
            spawn_local(async move {
                match ApiClient::new().catch_user(&decoded).await {
                    Ok(caught) => {
                        // Captura aceptada por el servidor: arranca el cooldown
                        start_cooldown.emit(CATCH_COOLDOWN_SECS);

                        show_toast.emit(format!(
                            "사용자를 잡았습니다! 총 {}번 잡혔습니다.",
                            caught.found_count
                        ));
                        last_caught.set(Some(caught));
                    }
                    Err(err) => {
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
    let seconds_left = *cooldown.seconds;

    html! {
        <div class="fixed inset-0" style="background-color: #030511;">
            <div class="mx-auto h-full max-w-md flex flex-col relative" style="max-width: 430px;">
                <header class="w-full py-6 px-6 flex justify-between items-center">
                    <h2 class="text-white text-xl font-bold">{"GNTC-YOUTH-IT"}</h2>
                    <div class="flex items-center space-x-2">
                        if scanner.cameras.len() > 1 {
                            <button
                                onclick={scanner.switch_camera.reform(|_| ())}
                                class="bg-gray-800 text-white px-4 py-2 rounded-full text-sm flex items-center"
                            >
                                {"📷 카메라 전환"}
                            </button>
                        }
                    </div>
                </header>

                <main class="flex-1 flex flex-col items-center justify-center px-6">
                    <div class={format!("w-full transition-opacity duration-1000 {}", fade)}>
                        <div class="text-center mb-8">
                            <h1 class="text-3xl font-bold text-white mb-2">{"술래 모드"}</h1>
                            <p class="text-lg text-gray-400">{"참가자의 QR 코드를 스캔해 잡으세요!"}</p>

                            if seconds_left > 0 {
                                <div class="mt-4 py-2 px-4 bg-gray-800 rounded-full inline-block">
                                    <p class="text-yellow-400 font-semibold">
                                        { format!("다음 스캔까지 {}초", seconds_left) }
                                    </p>
                                </div>
                            }
                        </div>

                        <div class="relative w-full aspect-square rounded-lg overflow-hidden mb-8 bg-black">
                            <div id="qr-reader" class="w-full h-full" />
                            <div class="absolute inset-0 pointer-events-none">
                                <div class="absolute inset-8 border-2 border-white/30" />
                            </div>

                            if seconds_left > 0 {
                                <div class="absolute inset-0 bg-black/70 flex items-center justify-center">
                                    <div class="text-center">
                                        <div class="text-4xl font-bold text-yellow-400 mb-2">{ seconds_left }</div>
                                        <p class="text-white">{"초 후에 다시 스캔할 수 있습니다"}</p>
                                    </div>
                                </div>
                            }
                        </div>

                        if let Some(caught) = last_caught.as_ref() {
                            <div class="w-full p-4 bg-gray-800/50 rounded-lg mb-6">
                                <div class="text-center">
                                    <h3 class="text-white font-bold mb-1">{"마지막으로 잡은 참가자"}</h3>
                                    <p class="text-gray-300">
                                        { format!("ID: {} / 잡힌 횟수: {}회", caught.id, caught.found_count) }
                                    </p>
                                </div>
                            </div>
                        }

                        <Toast
                            visible={*toast.visible}
                            message={(*toast.message).clone()}
                            color="bg-yellow-500"
                        />

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
