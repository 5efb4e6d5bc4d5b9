/// Contador de cooldown tras una captura aceptada (modo 술래/catcher).
///
/// Mientras está activo se descartan todas las decodificaciones, antes incluso
/// de consultar la puerta de throttling. Decrementa de uno en uno, nunca baja
/// de cero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    pub fn idle() -> Self {
        Self { remaining: 0 }
    }

    pub fn start(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    /// Un tick de un segundo. Devuelve los segundos restantes.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_inactive() {
        assert!(!Cooldown::idle().is_active());
        assert_eq!(Cooldown::idle().remaining(), 0);
    }

    #[test]
    fn reaches_zero_after_exact_ticks() {
        let mut cd = Cooldown::start(15);
        assert!(cd.is_active());
        for expected in (0..15).rev() {
            assert_eq!(cd.tick(), expected);
        }
        assert!(!cd.is_active());
    }

    #[test]
    fn never_goes_negative() {
        let mut cd = Cooldown::start(1);
        assert_eq!(cd.tick(), 0);
        assert_eq!(cd.tick(), 0);
        assert_eq!(cd.tick(), 0);
        assert!(!cd.is_active());
    }

    #[test]
    fn restart_replaces_remaining() {
        let mut cd = Cooldown::start(15);
        cd.tick();
        cd.tick();
        cd = Cooldown::start(15);
        assert_eq!(cd.remaining(), 15);
    }
}
