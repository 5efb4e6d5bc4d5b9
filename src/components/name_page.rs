// ============================================================================
// NAME PAGE - Registro del nombre del participante
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::models::ConnectedUser;
use crate::services::ApiClient;
use crate::utils::constants::{MAX_NAME_LEN, PAGE_FADE_IN_MS};

#[function_component(NamePage)]
pub fn name_page() -> Html {
    let navigator = use_navigator().expect("navigator disponible dentro del Router");
    let location = use_location().expect("location disponible dentro del Router");

    // Sin navigation state esta página no tiene sentido: volver a /connect
    let connected = location.state::<ConnectedUser>();
    {
        let navigator = navigator.clone();
        let missing = connected.is_none();
        use_effect_with(missing, move |missing| {
            if *missing {
                log::warn!("⚠️ /name sin navigation state, redirigiendo a /connect");
                navigator.replace(&Route::Connect);
            }
            || ()
        });
    }

    let name = use_state(String::new);
    let is_visible = use_state(|| false);
    let is_submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Fade-in de entrada
    {
        let is_visible = is_visible.clone();
        use_effect_with((), move |_| {
            let timer = Timeout::new(PAGE_FADE_IN_MS, move || is_visible.set(true));
            move || drop(timer)
        });
    }

    let user_id = match connected {
        Some(state) => state.user_id,
        None => return Html::default(), // redirige el efecto de arriba
    };

    let on_input = {
        let name = name.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
                // Escribir limpia el error anterior
                error.set(None);
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let is_submitting = is_submitting.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let trimmed = name.trim().to_string();
            if trimmed.is_empty() {
                error.set(Some("이름을 입력해주세요.".to_string()));
                return;
            }

            is_submitting.set(true);
            error.set(None);

            let is_submitting = is_submitting.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match ApiClient::new().submit_name(user_id, &trimmed).await {
                    Ok(saved) => {
                        log::info!("✅ Nombre registrado para participante {}", saved.user_id);
                        let state = ConnectedUser {
                            user_id: saved.user_id,
                            name: saved.name,
                        };
                        navigator.push_with_state(&Route::Scan, state);
                    }
                    Err(err) => {
                        log::error!("❌ Error registrando nombre: {}", err);
                        error.set(Some(err.toast_message()));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let fade = if *is_visible { "opacity-100" } else { "opacity-0" };
    let name_empty = name.trim().is_empty();

    html! {
        <div class="fixed inset-0" style="background-color: #030511;">
            <div class="mx-auto h-full max-w-md flex flex-col relative" style="max-width: 430px;">
                <header class="w-full py-6 px-6">
                    <h2 class="text-white text-xl font-bold">{"GNTC-YOUTH-IT"}</h2>
                </header>

                <main class="flex-1 flex flex-col items-center justify-center px-6">
                    <div class={format!("w-full transition-opacity duration-1000 {}", fade)}>
                        <div class="text-center mb-10">
                            <h1 class="text-3xl font-bold text-white mb-2">{"참가자 정보"}</h1>
                            <p class="text-lg text-gray-400">{"보물찾기에 참여할 이름을 입력해주세요"}</p>
                        </div>

                        <div class="w-full max-w-sm mx-auto">
                            <form onsubmit={on_submit} class="space-y-6">
                                <div>
                                    <label for="name" class="block text-sm font-medium text-gray-300 mb-2">
                                        {"이름"}
                                    </label>
                                    <input
                                        type="text"
                                        id="name"
                                        value={(*name).clone()}
                                        oninput={on_input}
                                        placeholder="이름을 입력하세요"
                                        class="w-full px-4 py-3 bg-gray-800 text-white rounded-lg border border-gray-700 focus:outline-none focus:ring-2 focus:ring-blue-500"
                                        disabled={*is_submitting}
                                        autofocus=true
                                        maxlength={MAX_NAME_LEN.to_string()}
                                    />
                                </div>

                                if let Some(message) = error.as_ref() {
                                    <div class="p-3 bg-red-500/20 rounded-lg">
                                        <p class="text-red-500 text-sm">{ message }</p>
                                    </div>
                                }

                                <button
                                    type="submit"
                                    class={format!(
                                        "w-full py-4 bg-white text-black rounded-full text-lg font-bold \
                                         hover:bg-gray-100 transition-all duration-300 transform hover:scale-105 \
                                         disabled:opacity-50 disabled:cursor-not-allowed {}",
                                        if name_empty { "opacity-50" } else { "opacity-100" }
                                    )}
                                    disabled={*is_submitting || name_empty}
                                >
                                    if *is_submitting {
                                        <span class="flex items-center justify-center">
                                            <span class="animate-spin rounded-full h-5 w-5 border-t-2 border-b-2 border-black mr-3"></span>
                                            {"저장 중..."}
                                        </span>
                                    } else {
                                        {"시작하기 💎"}
                                    }
                                </button>
                            </form>
                        </div>
                    </div>
                </main>
            </div>
        </div>
    }
}
