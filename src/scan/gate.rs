use crate::scan::Cooldown;

/// Puerta anti-rebote para decodificaciones QR.
///
/// Un QR que permanece delante de la cámara dispara decodificaciones en ráfaga;
/// la puerta solo acepta un evento si ha pasado el intervalo mínimo desde el
/// último aceptado. Los rechazos se descartan en silencio: sin request, sin
/// efecto visible y sin tocar el estado de la puerta.
///
/// Es una comparación de timestamps, no un mutex: no garantiza exclusión si la
/// librería de decodificación disparase más rápido que el intervalo mientras un
/// request sigue en vuelo.
#[derive(Debug)]
pub struct ScanGate {
    min_interval_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl ScanGate {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last_accepted_ms: None,
        }
    }

    /// Intenta aceptar una decodificación ocurrida en `now_ms`.
    /// Si se acepta, el timestamp queda registrado como último aceptado.
    pub fn try_accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.min_interval_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }

    pub fn last_accepted_ms(&self) -> Option<f64> {
        self.last_accepted_ms
    }
}

/// Decisión combinada del modo 술래: el cooldown se consulta primero y,
/// mientras está activo, la puerta de throttling ni se toca (su ventana no
/// se mueve). Solo si ambas dejan pasar se lanza el request.
pub fn accept_catch(cooldown: &Cooldown, gate: &mut ScanGate, now_ms: f64) -> bool {
    if cooldown.is_active() {
        return false;
    }
    gate.try_accept(now_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_decode_is_accepted() {
        let mut gate = ScanGate::new(3000.0);
        assert!(gate.try_accept(10_000.0));
    }

    #[test]
    fn decode_within_interval_is_rejected() {
        let mut gate = ScanGate::new(3000.0);
        assert!(gate.try_accept(10_000.0));
        assert!(!gate.try_accept(10_001.0));
        assert!(!gate.try_accept(12_999.0));
    }

    #[test]
    fn decode_after_interval_is_accepted() {
        let mut gate = ScanGate::new(3000.0);
        assert!(gate.try_accept(10_000.0));
        assert!(gate.try_accept(13_000.0));
    }

    #[test]
    fn rejects_do_not_move_the_window() {
        // Un rechazo no debe retrasar la siguiente aceptación válida.
        let mut gate = ScanGate::new(5000.0);
        assert!(gate.try_accept(0.0));
        assert!(!gate.try_accept(4999.0));
        assert_eq!(gate.last_accepted_ms(), Some(0.0));
        assert!(gate.try_accept(5000.0));
    }

    #[test]
    fn cooldown_blocks_even_with_throttle_window_elapsed() {
        let mut gate = ScanGate::new(2000.0);
        assert!(accept_catch(&Cooldown::idle(), &mut gate, 0.0));

        // Cooldown activo: se descarta aunque hayan pasado los 2s de throttling,
        // y la ventana de la puerta no se mueve.
        let active = Cooldown::start(15);
        assert!(!accept_catch(&active, &mut gate, 10_000.0));
        assert_eq!(gate.last_accepted_ms(), Some(0.0));

        // Con el cooldown agotado vuelve a mandar la puerta de throttling
        let mut expired = Cooldown::start(1);
        expired.tick();
        assert!(accept_catch(&expired, &mut gate, 10_000.0));
    }

    #[test]
    fn throttle_still_applies_without_cooldown() {
        let mut gate = ScanGate::new(2000.0);
        assert!(accept_catch(&Cooldown::idle(), &mut gate, 0.0));
        assert!(!accept_catch(&Cooldown::idle(), &mut gate, 500.0));
    }

    #[test]
    fn repeated_bursts_accept_one_per_window() {
        let mut gate = ScanGate::new(2000.0);
        let mut accepted = 0;
        // 10 decodificaciones en 4 segundos, cada 400ms
        for i in 0..10 {
            if gate.try_accept(i as f64 * 400.0) {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 2); // t=0 y t=2000
    }
}
