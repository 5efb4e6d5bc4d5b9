// ============================================================================
// QR IMAGE - QR imprimible de un tesoro o de un participante
// ============================================================================
// Sirve /treasure/:id y /user/:id; el kind decide el endpoint y los textos,
// el resto del scaffold (loading / error / img base64) es el mismo.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::QrImage;
use crate::services::{ApiClient, ApiError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QrImageKind {
    Treasure,
    User,
}

impl QrImageKind {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Treasure => "Treasure ID",
            Self::User => "User ID",
        }
    }

    pub fn alt_text(self) -> &'static str {
        match self {
            Self::Treasure => "Treasure QR Code",
            Self::User => "User QR Code",
        }
    }

    async fn fetch(self, id: i64) -> Result<QrImage, ApiError> {
        let api = ApiClient::new();
        match self {
            Self::Treasure => api.fetch_treasure_image(id).await,
            Self::User => api.fetch_user_image(id).await,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct QrImageProps {
    pub kind: QrImageKind,
    pub id: i64,
}

#[function_component(QrImagePage)]
pub fn qr_image_page(props: &QrImageProps) -> Html {
    let image = use_state(|| None::<QrImage>);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| true);

    {
        let image = image.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((props.kind, props.id), move |(kind, id)| {
            let kind = *kind;
            let id = *id;
            spawn_local(async move {
                loading.set(true);
                match kind.fetch(id).await {
                    Ok(fetched) => image.set(Some(fetched)),
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <p>{"Loading..."}</p> };
    }

    if let Some(message) = error.as_ref() {
        return html! { <p>{ format!("Error: {}", message) }</p> };
    }

    match image.as_ref() {
        Some(qr) => html! {
            <div>
                <h1>{ format!("{}: {}", props.kind.heading(), qr.id) }</h1>
                <img
                    src={format!("data:image/png;base64,{}", qr.image)}
                    alt={props.kind.alt_text()}
                />
            </div>
        },
        None => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_label_their_resource() {
        assert_eq!(QrImageKind::Treasure.heading(), "Treasure ID");
        assert_eq!(QrImageKind::User.heading(), "User ID");
        assert_ne!(
            QrImageKind::Treasure.alt_text(),
            QrImageKind::User.alt_text()
        );
    }
}
