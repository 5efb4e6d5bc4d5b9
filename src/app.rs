// ============================================================================
// APP - Rutas y componente raíz
// ============================================================================
// Cada página monta sus propias instancias de scanner/toast/cooldown;
// no hay estado compartido entre rutas salvo el navigation state.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    CatcherPage, ConnectPage, MainPage, NamePage, QrImageKind, QrImagePage, RankingPage, ScanPage,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/connect")]
    Connect,
    #[at("/name")]
    Name,
    #[at("/scan")]
    Scan,
    #[at("/catcher")]
    Catcher,
    #[at("/rank")]
    Ranking,
    #[at("/treasure/:id")]
    Treasure { id: i64 },
    #[at("/user/:id")]
    User { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <MainPage /> },
        Route::Connect => html! { <ConnectPage /> },
        Route::Name => html! { <NamePage /> },
        Route::Scan => html! { <ScanPage /> },
        Route::Catcher => html! { <CatcherPage /> },
        Route::Ranking => html! { <RankingPage /> },
        Route::Treasure { id } => html! { <QrImagePage kind={QrImageKind::Treasure} {id} /> },
        Route::User { id } => html! { <QrImagePage kind={QrImageKind::User} {id} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
