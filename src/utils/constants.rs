/// URL base de la API del evento.
/// Configurada en tiempo de compilación via API_BASE_URL (ver build.rs y .env.example).
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "https://api.bhohwa.click",
};

/// Parámetros del escáner (html5-qrcode)
pub const SCANNER_FPS: u32 = 10;
pub const SCANNER_QRBOX: u32 = 250;

/// Intervalo mínimo entre decodificaciones aceptadas, por página.
/// La puerta es independiente del cooldown: ambas deben pasar.
pub const CONNECT_THROTTLE_MS: f64 = 3000.0;
pub const TREASURE_THROTTLE_MS: f64 = 5000.0;
pub const CATCH_THROTTLE_MS: f64 = 2000.0;

/// Cooldown tras una captura aceptada en modo 술래
pub const CATCH_COOLDOWN_SECS: u32 = 15;

/// Duración por defecto de un toast
pub const TOAST_DURATION_MS: u32 = 3000;

/// Auto-cierre del panel de estadísticas en la página de escaneo
pub const STATS_AUTOCLOSE_MS: u32 = 5000;

/// Refresco del ranking en la página de clasificación
pub const RANKING_POLL_MS: u32 = 10_000;

/// Fade-in de entrada de las páginas
pub const PAGE_FADE_IN_MS: u32 = 500;

/// Longitud máxima del nombre de participante
pub const MAX_NAME_LEN: usize = 20;
