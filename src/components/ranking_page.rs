// ============================================================================
// RANKING PAGE - Clasificación en vivo para el proyector
// ============================================================================
// Fetch inicial + refresco cada 10s; el intervalo muere con la vista.
// ============================================================================

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::RankEntry;
use crate::services::ApiClient;
use crate::utils::constants::RANKING_POLL_MS;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

fn podium_card_class(index: usize) -> &'static str {
    match index {
        0 => "p-6 rounded-xl bg-yellow-500/10 border border-yellow-500/20",
        1 => "p-6 rounded-xl bg-gray-400/10 border border-gray-400/20",
        _ => "p-6 rounded-xl bg-orange-700/10 border border-orange-700/20",
    }
}

fn podium_name_class(index: usize) -> &'static str {
    match index {
        0 => "text-2xl font-bold text-yellow-500",
        1 => "text-2xl font-bold text-gray-400",
        _ => "text-2xl font-bold text-orange-700",
    }
}

fn podium_bar_class(index: usize) -> &'static str {
    match index {
        0 => "rounded-full h-2 transition-all duration-500 ease-out bg-yellow-500",
        1 => "rounded-full h-2 transition-all duration-500 ease-out bg-gray-400",
        _ => "rounded-full h-2 transition-all duration-500 ease-out bg-orange-700",
    }
}

/// Color de la barra de progreso según el score
fn score_bar_class(score: i32) -> &'static str {
    if score >= 8 {
        "rounded-full h-2 transition-all duration-500 ease-out bg-green-500"
    } else if score >= 5 {
        "rounded-full h-2 transition-all duration-500 ease-out bg-yellow-500"
    } else if score >= 0 {
        "rounded-full h-2 transition-all duration-500 ease-out bg-orange-500"
    } else {
        "rounded-full h-2 transition-all duration-500 ease-out bg-red-500"
    }
}

/// Anchura 0-100% de la barra de progreso de un score sobre 10
fn score_bar_width(score: i32) -> f64 {
    ((score as f64 / 10.0) * 100.0).clamp(0.0, 100.0)
}

#[function_component(RankingPage)]
pub fn ranking_page() -> Html {
    let rankings = use_state(Vec::<RankEntry>::new);
    let loading = use_state(|| true);

    // Fetch inicial + polling; el Interval se suelta al desmontar
    {
        let rankings = rankings.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let fetch = {
                let rankings = rankings.clone();
                let loading = loading.clone();
                move || {
                    let rankings = rankings.clone();
                    let loading = loading.clone();
                    spawn_local(async move {
                        match ApiClient::new().fetch_rankings().await {
                            Ok(fetched) => {
                                rankings.set(fetched);
                            }
                            Err(err) => {
                                // Mantener los últimos datos en pantalla
                                log::error!("❌ Error refrescando ranking: {}", err);
                            }
                        }
                        loading.set(false);
                    });
                }
            };

            fetch();
            let poll = Interval::new(RANKING_POLL_MS, fetch);

            move || drop(poll)
        });
    }

    if *loading {
        return html! {
            <div class="flex justify-center items-center min-h-screen bg-[#1c1f27]">
                <div class="text-xl text-white">{"Loading..."}</div>
            </div>
        };
    }

    html! {
        <div class="min-h-screen h-full w-full bg-[#1c1f27] text-white p-8 flex flex-col">
            <div class="max-w-7xl mx-auto w-full flex-1">
                <div class="flex justify-between items-center mb-8 mt-5">
                    <h1 class="text-4xl font-bold">{"밭에 감추인 보화 순위표"}</h1>
                    <div class="text-sm text-gray-400">{"자동 갱신중"}</div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-8 mb-8">
                    { for rankings.iter().take(3).enumerate().map(|(index, user)| html! {
                        <div key={user.id} class={podium_card_class(index)}>
                            <div class="flex items-center justify-between mb-4">
                                <span class="text-4xl">{ MEDALS[index] }</span>
                                <span class={podium_name_class(index)}>{ &user.name }</span>
                            </div>
                            <div class="text-lg">{ format!("점수: {}점", user.score) }</div>
                            <div class="text-lg">{ format!("찾은 보물: {}개", user.treasure_count) }</div>
                            <div class="mt-2 w-full bg-gray-700 rounded-full h-2">
                                <div
                                    class={podium_bar_class(index)}
                                    style={format!(
                                        "width: {:.0}%;",
                                        ((user.treasure_count as f64 / 10.0) * 20.0).min(100.0)
                                    )}
                                />
                            </div>
                        </div>
                    }) }
                </div>

                <div class="bg-[#2b2d3a] rounded-xl shadow-xl overflow-hidden mt-8">
                    <table class="w-full">
                        <thead>
                            <tr class="bg-[#393d4c] text-gray-300">
                                <th class="px-8 py-5 text-center text-lg">{"순위"}</th>
                                <th class="px-8 py-5 text-center text-lg">{"이름"}</th>
                                <th class="px-8 py-5 text-center text-lg">{"점수"}</th>
                                <th class="px-8 py-5 text-center text-lg">{"보물 개수"}</th>
                                <th class="px-8 py-5 text-right text-lg">{"진행률"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rankings.iter().enumerate().map(|(index, user)| html! {
                                <tr
                                    key={user.id}
                                    class={format!(
                                        "border-b border-[#393d4c] hover:bg-[#393d4c] transition-colors {}",
                                        if index % 2 == 0 { "bg-[#2b2d3a]" } else { "bg-[#32354a]" }
                                    )}
                                >
                                    <td class="px-8 py-6 text-center text-lg">{ index + 1 }</td>
                                    <td class="px-8 py-6 text-center">
                                        <span class="text-lg font-medium">{ &user.name }</span>
                                    </td>
                                    <td class="px-8 py-6 text-center text-lg">{ format!("{}점", user.score) }</td>
                                    <td class="px-8 py-6 text-center text-lg">{ format!("{}개", user.treasure_count) }</td>
                                    <td class="px-8 py-6 text-right">
                                        <div class="flex items-center justify-end gap-4">
                                            <div class="w-24 bg-gray-700 rounded-full h-2">
                                                <div
                                                    class={score_bar_class(user.score)}
                                                    style={format!("width: {:.0}%;", score_bar_width(user.score))}
                                                />
                                            </div>
                                        </div>
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bar_width_is_clamped() {
        assert_eq!(score_bar_width(-3), 0.0);
        assert_eq!(score_bar_width(0), 0.0);
        assert_eq!(score_bar_width(5), 50.0);
        assert_eq!(score_bar_width(10), 100.0);
        assert_eq!(score_bar_width(25), 100.0);
    }

    #[test]
    fn score_bar_color_thresholds() {
        assert!(score_bar_class(9).contains("bg-green-500"));
        assert!(score_bar_class(5).contains("bg-yellow-500"));
        assert!(score_bar_class(2).contains("bg-orange-500"));
        assert!(score_bar_class(-1).contains("bg-red-500"));
    }
}
