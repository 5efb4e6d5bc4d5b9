// ============================================================================
// MAIN PAGE - Pantalla de entrada del evento
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::utils::constants::PAGE_FADE_IN_MS;

/// Partícula decorativa alrededor del cofre del tesoro
#[derive(Clone, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    size: f64,
    duration: f64,
    delay: f64,
}

/// Distribución radial alrededor del centro, recortada para no salirse mucho
fn make_particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let angle = js_sys::Math::random() * std::f64::consts::PI * 2.0;
            let distance = 20.0 + js_sys::Math::random() * 100.0;
            let left = 50.0 + angle.cos() * distance;
            let top = 50.0 + angle.sin() * distance;

            Particle {
                left: left.clamp(-20.0, 200.0),
                top: top.clamp(-20.0, 200.0),
                size: js_sys::Math::random() * 18.0,
                duration: 2.0 + js_sys::Math::random() * 4.0,
                delay: js_sys::Math::random() * 3.0,
            }
        })
        .collect()
}

#[function_component(MainPage)]
pub fn main_page() -> Html {
    let navigator = use_navigator().expect("navigator disponible dentro del Router");
    let is_visible = use_state(|| false);
    let particles = use_state(|| make_particles(25));

    // Fade-in de entrada
    {
        let is_visible = is_visible.clone();
        use_effect_with((), move |_| {
            let timer = Timeout::new(PAGE_FADE_IN_MS, move || is_visible.set(true));
            move || drop(timer)
        });
    }

    let on_start = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Connect))
    };

    let fade = if *is_visible { "opacity-100" } else { "opacity-0" };

    html! {
        <div class="fixed inset-0" style="background-color: #030511;">
            <div class="mx-auto h-full max-w-md flex flex-col relative" style="max-width: 430px;">
                <header class="w-full py-6 px-6">
                    <h2 class="text-white text-xl font-bold">{"GNTC-YOUTH-IT"}</h2>
                </header>

                <main class="flex-1 flex flex-col items-center justify-center px-6">
                    <div class={format!("text-center mb-16 transition-opacity duration-1000 {}", fade)}>
                        <h1 class="text-4xl font-bold text-white mb-2">{"밭에 감추인 보화"}</h1>
                        <p class="text-lg text-gray-400">{"보물을 찾으러 떠나볼까요?"}</p>
                    </div>

                    <div
                        class={format!("relative w-32 h-32 mb-20 transition-all duration-1000 {}", fade)}
                        style="animation: float 3s ease-in-out infinite;"
                    >
                        <div class="w-full h-full bg-gradient-to-br from-yellow-400 to-yellow-600 rounded-xl shadow-lg flex items-center justify-center transform rotate-45">
                            <span class="text-5xl transform -rotate-45">{"💎"}</span>
                        </div>

                        { for particles.iter().map(|p| html! {
                            <div
                                class="absolute rounded-full bg-blue-300 opacity-30"
                                style={format!(
                                    "left: {:.1}%; top: {:.1}%; width: {:.1}px; height: {:.1}px; \
                                     animation: float {:.1}s ease-in-out infinite; animation-delay: {:.1}s;",
                                    p.left, p.top, p.size, p.size, p.duration, p.delay
                                )}
                            />
                        }) }
                    </div>

                    <div class="w-full max-w-xs">
                        <button
                            onclick={on_start}
                            class={format!(
                                "w-full py-4 bg-white text-black rounded-full text-lg font-bold \
                                 hover:bg-gray-100 transition-all duration-300 transform hover:scale-105 {}",
                                fade
                            )}
                        >
                            {"보물찾기 시작하기 💎"}
                        </button>
                    </div>
                </main>
            </div>
        </div>
    }
}
