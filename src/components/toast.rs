use yew::prelude::*;

/// Toast transitorio centrado arriba. La visibilidad y el timer los gobierna
/// `use_toast`; este componente solo pinta.
#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub visible: bool,
    pub message: String,
    /// Clase de color de fondo (verde para éxito, amarillo en modo 술래)
    #[prop_or_else(|| "bg-green-500".to_string())]
    pub color: String,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <div class="fixed top-20 left-1/2 transform -translate-x-1/2 z-50">
            <div class={format!(
                "{} text-white px-6 py-3 rounded-lg shadow-lg transition-opacity duration-300 opacity-90",
                props.color
            )}>
                { &props.message }
            </div>
        </div>
    }
}
