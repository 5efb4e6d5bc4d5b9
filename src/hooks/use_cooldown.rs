use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::scan::Cooldown;

/// Cooldown visible tras una captura aceptada.
///
/// `seconds` es el estado renderizable; `state` es la celda compartida que el
/// callback de decodificación consulta directamente. El callback se registra
/// una sola vez en la librería JS y sobrevive a todos los renders, así que no
/// puede leer snapshots de `use_state` (estarían congelados en el primer
/// render): lee la celda, que siempre está al día.
pub struct UseCooldownHandle {
    pub seconds: UseStateHandle<u32>,
    pub state: Rc<RefCell<Cooldown>>,
    pub start: Callback<u32>,
}

#[hook]
pub fn use_cooldown() -> UseCooldownHandle {
    let seconds = use_state(|| 0u32);
    let state = use_mut_ref(Cooldown::idle);
    let interval = use_mut_ref(|| None::<Interval>);

    let start = {
        let seconds = seconds.clone();
        let state = state.clone();
        let interval = interval.clone();

        Callback::from(move |secs: u32| {
            *state.borrow_mut() = Cooldown::start(secs);
            seconds.set(secs);

            let tick = {
                let seconds = seconds.clone();
                let state = state.clone();
                Interval::new(1000, move || {
                    let left = state.borrow_mut().tick();
                    seconds.set(left);
                })
            };
            // Solo un intervalo por sesión: reemplazar cancela el anterior
            *interval.borrow_mut() = Some(tick);
        })
    };

    // Parar el tick cuando llega a cero
    {
        let interval = interval.clone();
        use_effect_with(*seconds, move |secs| {
            if *secs == 0 {
                interval.borrow_mut().take();
            }
            || ()
        });
    }

    // Al desmontar: cancelar el intervalo pendiente
    {
        let interval = interval.clone();
        use_effect_with((), move |_| {
            move || {
                interval.borrow_mut().take();
            }
        });
    }

    UseCooldownHandle {
        seconds,
        state,
        start,
    }
}
