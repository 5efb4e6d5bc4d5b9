use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::constants::TOAST_DURATION_MS;

/// Modelo puro del toast: como mucho un mensaje visible, sin cola.
///
/// Cada `show` abre una generación nueva y reemplaza el mensaje
/// (last-write-wins). Un `dismiss` solo oculta si pertenece a la generación
/// vigente: el dismiss de un timer reemplazado no toca el mensaje actual.
#[derive(Debug)]
pub struct ToastSlot {
    visible: bool,
    message: String,
    generation: u64,
}

impl ToastSlot {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            message: String::new(),
            generation: 0,
        }
    }

    /// Muestra `text` y devuelve la generación que debe llevar su timer.
    pub fn show(&mut self, text: String) -> u64 {
        self.generation += 1;
        self.message = text;
        self.visible = true;
        self.generation
    }

    pub fn dismiss(&mut self, generation: u64) {
        if generation == self.generation {
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub struct UseToastHandle {
    pub visible: UseStateHandle<bool>,
    pub message: UseStateHandle<String>,
    pub show: Callback<String>,
    pub show_for: Callback<(String, u32)>,
}

#[hook]
pub fn use_toast() -> UseToastHandle {
    let visible = use_state(|| false);
    let message = use_state(String::new);
    // El slot es la verdad; los use_state solo reflejan su estado al render.
    let slot = use_mut_ref(ToastSlot::hidden);
    // Soltar el Timeout lo cancela; reemplazarlo cancela el anterior.
    let timer = use_mut_ref(|| None::<Timeout>);

    let show_for = {
        let visible = visible.clone();
        let message = message.clone();
        let slot = slot.clone();
        let timer = timer.clone();

        Callback::from(move |(text, duration_ms): (String, u32)| {
            let generation = slot.borrow_mut().show(text.clone());
            message.set(text);
            visible.set(true);

            let dismiss = {
                let visible = visible.clone();
                let slot = slot.clone();
                // No tocamos la celda del timer desde su propio callback:
                // un Timeout ya disparado es inerte y se suelta al reemplazarlo.
                // El slot ignora además el dismiss de generaciones reemplazadas.
                Timeout::new(duration_ms, move || {
                    let mut slot = slot.borrow_mut();
                    slot.dismiss(generation);
                    visible.set(slot.is_visible());
                })
            };
            // Cancela el timer pendiente anterior, si lo había
            *timer.borrow_mut() = Some(dismiss);
        })
    };

    let show = {
        let show_for = show_for.clone();
        Callback::from(move |text: String| {
            show_for.emit((text, TOAST_DURATION_MS));
        })
    };

    // Al desmontar: cancelar el timer pendiente y ocultar el toast
    {
        let visible = visible.clone();
        let slot = slot.clone();
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                timer.borrow_mut().take();
                let mut slot = slot.borrow_mut();
                let generation = slot.generation;
                slot.dismiss(generation);
                visible.set(false);
            }
        });
    }

    UseToastHandle {
        visible,
        message,
        show,
        show_for,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_dismiss_hides() {
        let mut slot = ToastSlot::hidden();
        let generation = slot.show("보물을 찾았습니다! 🎉".into());
        assert!(slot.is_visible());
        slot.dismiss(generation);
        assert!(!slot.is_visible());
    }

    #[test]
    fn second_show_within_duration_wins() {
        // Dos `show` seguidos: queda exactamente un toast visible, el segundo.
        let mut slot = ToastSlot::hidden();
        let first = slot.show("첫 번째".into());
        let second = slot.show("두 번째".into());

        // El timer reemplazado dispara: no debe ocultar el mensaje vigente
        slot.dismiss(first);
        assert!(slot.is_visible());
        assert_eq!(slot.message(), "두 번째");

        slot.dismiss(second);
        assert!(!slot.is_visible());
    }

    #[test]
    fn show_after_dismiss_reopens() {
        let mut slot = ToastSlot::hidden();
        let first = slot.show("하나".into());
        slot.dismiss(first);
        slot.show("둘".into());
        assert!(slot.is_visible());
        assert_eq!(slot.message(), "둘");
    }
}
