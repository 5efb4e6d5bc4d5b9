// ============================================================================
// SCAN PAGE - Escaneo de QR de tesoros
// ============================================================================
// decode -> puerta de throttling (5s) -> POST /treasure/find -> toast + stats
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Toast;
use crate::hooks::{use_scanner, use_toast};
use crate::models::{ConnectedUser, UserStats};
use crate::scan::ScanGate;
use crate::services::ApiClient;
use crate::utils::constants::{PAGE_FADE_IN_MS, STATS_AUTOCLOSE_MS, TREASURE_THROTTLE_MS};

#[function_component(ScanPage)]
pub fn scan_page() -> Html {
    let navigator = use_navigator().expect("navigator disponible dentro del Router");
    let location = use_location().expect("location disponible dentro del Router");

    // Sin identidad no se puede reclamar tesoros: volver a /connect
    let connected = location.state::<ConnectedUser>();
    {
        let navigator = navigator.clone();
        let missing = connected.is_none();
        use_effect_with(missing, move |missing| {
            if *missing {
                log::warn!("⚠️ /scan sin navigation state, redirigiendo a /connect");
                navigator.replace(&Route::Connect);
            }
            || ()
        });
    }

    let is_visible = use_state(|| false);
    let toast = use_toast();

    let is_stats_open = use_state(|| false);
    let stats = use_state(|| None::<UserStats>);
    let no_treasure = use_state(|| false);
    let stats_timer = use_mut_ref(|| None::<Timeout>);

    let gate = use_mut_ref(|| ScanGate::new(TREASURE_THROTTLE_MS));

    let user_id = connected.as_ref().map(|state| state.user_id).unwrap_or(0);
    let user_name = connected
        .as_ref()
        .map(|state| state.name.clone())
        .unwrap_or_default();

    // Traer {treasureCount, rank, score}; 404 = aún sin tesoros (no es error)
    let fetch_stats = {
        let stats = stats.clone();
        let no_treasure = no_treasure.clone();
        let show_toast = toast.show.clone();

        Callback::from(move |_: ()| {
            let stats = stats.clone();
            let no_treasure = no_treasure.clone();
            let show_toast = show_toast.clone();
            spawn_local(async move {
                match ApiClient::new().fetch_user_stats(user_id).await {
                    Ok(Some(fetched)) => {
                        no_treasure.set(false);
                        stats.set(Some(fetched));
                    }
                    Ok(None) => {
                        no_treasure.set(true);
                        stats.set(None);
                    }
                    Err(err) => {
                        log::error!("❌ Error cargando estadísticas: {}", err);
                        show_toast.emit("순위 정보를 불러오는데 실패했습니다.".to_string());
                    }
                }
            });
        })
    };

    // Registrado una sola vez en la librería JS: solo captura celdas y setters
    let on_decode = {
        let show_toast = toast.show.clone();
        let fetch_stats = fetch_stats.clone();
        let gate = gate.clone();

        Callback::from(move |decoded: String| {
            if !gate.borrow_mut().try_accept(js_sys::Date::now()) {
                log::debug!("Throttled: decodificación demasiado seguida");
                return;
            }

            let show_toast = show_toast.clone();
            let fetch_stats = fetch_stats.clone();
            spawn_local(async move {
                match ApiClient::new().find_treasure(user_id, &decoded).await {
                    Ok(()) => {
                        show_toast.emit("보물을 찾았습니다! 🎉".to_string());
                        // Refrescar el panel tras cada hallazgo
                        fetch_stats.emit(());
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

    // Auto-cierre del panel de estadísticas; reabrir reinicia el timer
    {
        let is_stats_open_handle = is_stats_open.clone();
        let stats_timer = stats_timer.clone();
        use_effect_with(*is_stats_open, move |open| {
            if *open {
                let is_stats_open = is_stats_open_handle.clone();
                let close = Timeout::new(STATS_AUTOCLOSE_MS, move || is_stats_open.set(false));
                *stats_timer.borrow_mut() = Some(close);
            }
            let stats_timer = stats_timer.clone();
            move || {
                stats_timer.borrow_mut().take();
            }
        });
    }

    let on_stats_click = {
        let is_stats_open = is_stats_open.clone();
        let fetch_stats = fetch_stats.clone();
        Callback::from(move |_| {
            if !*is_stats_open {
                fetch_stats.emit(());
            }
            is_stats_open.set(!*is_stats_open);
        })
    };

    if connected.is_none() {
        return Html::default(); // redirige el efecto de arriba
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
                            <h1 class="text-3xl font-bold text-white mb-2">{"보물 QR 코드 스캔"}</h1>
                            <p class="text-lg text-gray-400">
                                { format!("{}님, 보물의 QR 코드를 스캔해주세요", user_name) }
                            </p>
                        </div>

                        <div class="relative w-full aspect-square rounded-lg overflow-hidden mb-8 bg-black">
                            <div id="qr-reader" class="w-full h-full" />
                            <div class="absolute inset-0 pointer-events-none">
                                <div class="absolute inset-8 border-2 border-white/30" />
                            </div>
                        </div>

                        <Toast visible={*toast.visible} message={(*toast.message).clone()} />

                        if let Some(error) = scanner.error.as_ref() {
                            <div class="w-full p-4 bg-red-500/20 rounded-lg mb-4">
                                <p class="text-red-500 text-center">{ error }</p>
                            </div>
                        }
                    </div>
                </main>

                <div class="absolute bottom-6 right-6">
                    <div class={format!(
                        "flex items-center bg-gray-800 rounded-full transition-all duration-300 {}",
                        if *is_stats_open { "px-6" } else { "px-3" }
                    )}>
                        if *is_stats_open {
                            if *no_treasure {
                                <div class="flex items-center mr-4">
                                    <span class="text-gray-400">{"아직까지 찾은 보물이 없습니다."}</span>
                                </div>
                            } else if let Some(stats) = stats.as_ref() {
                                <div class="flex items-center mr-4 text-white">
                                    <div class="text-center mr-4">
                                        <div class="text-sm text-gray-400">{"찾은 보물"}</div>
                                        <div class="text-xl font-bold">{ format!("{}개", stats.treasure_count) }</div>
                                    </div>
                                    <div class="text-center mr-4">
                                        <div class="text-sm text-gray-400">{"점수"}</div>
                                        <div class="text-xl font-bold">{ format!("{}점", stats.score) }</div>
                                    </div>
                                    <div class="text-center">
                                        <div class="text-sm text-gray-400">{"현재 순위"}</div>
                                        <div class="text-xl font-bold">{ format!("{}위", stats.rank) }</div>
                                    </div>
                                </div>
                            }
                        }
                        <button onclick={on_stats_click} class="w-12 h-12 flex items-center justify-center">
                            <span class="text-2xl">{ if *is_stats_open { "📊" } else { "💭" } }</span>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
