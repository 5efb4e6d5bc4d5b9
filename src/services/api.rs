// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP a api.bhohwa.click.
// Las páginas deciden qué hacer con cada resultado.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    CaughtUser, ErrorBody, FindTreasureRequest, NameRequest, NameResponse, QrImage, RankEntry,
    User, UserStats,
};
use crate::utils::constants::API_BASE_URL;

/// Mensaje genérico cuando el servidor no manda {message}
const FALLBACK_SERVER_MSG: &str = "오류가 발생했습니다.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Fallo de fetch o de parseo: el servidor no llegó a responder algo útil
    #[error("network error: {0}")]
    Network(String),
    /// Respuesta no-2xx; `message` viene del cuerpo {message} si existe
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404, .. })
    }

    /// Mensaje listo para mostrar en un toast.
    pub fn toast_message(&self) -> String {
        match self {
            ApiError::Network(_) => "네트워크 오류가 발생했습니다. 다시 시도해주세요.".to_string(),
            ApiError::Server { message, .. } => message.clone(),
        }
    }
}

/// Convierte una respuesta no-OK en ApiError::Server, extrayendo {message}.
async fn server_error(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            message: Some(msg),
        }) => msg,
        _ => FALLBACK_SERVER_MSG.to_string(),
    };
    ApiError::Server { status, message }
}

async fn parse_ok<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(server_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Network(format!("parse error: {}", e)))
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Resolver identidad de un participante por su código QR
    pub async fn get_user(&self, user_code: &str) -> Result<User, ApiError> {
        let url = format!("{}/user?userCode={}", self.base_url, user_code);

        log::info!("🔍 Resolviendo participante por código QR");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_ok(response).await
    }

    /// Registrar el nombre de un participante
    pub async fn submit_name(&self, user_id: i64, name: &str) -> Result<NameResponse, ApiError> {
        let url = format!("{}/user/name", self.base_url);
        let request = NameRequest {
            user_id,
            name: name.to_string(),
        };

        log::info!("📝 Registrando nombre para participante {}", user_id);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(format!("serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_ok(response).await
    }

    /// Reclamar un tesoro escaneado
    pub async fn find_treasure(
        &self,
        user_id: i64,
        treasure_code: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/treasure/find", self.base_url);
        let request = FindTreasureRequest {
            user_id,
            treasure_code: treasure_code.to_string(),
        };

        log::info!("💎 Reclamando tesoro para participante {}", user_id);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| ApiError::Network(format!("serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(server_error(response).await);
        }
        Ok(())
    }

    /// Marcar a un participante como atrapado (modo 술래)
    pub async fn catch_user(&self, user_code: &str) -> Result<CaughtUser, ApiError> {
        let url = format!("{}/user/found?userCode={}", self.base_url, user_code);

        log::info!("🏃 Marcando participante como atrapado");

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_ok(response).await
    }

    /// Estadísticas personales. 404 significa "aún sin tesoros", no un error.
    pub async fn fetch_user_stats(&self, user_id: i64) -> Result<Option<UserStats>, ApiError> {
        let url = format!("{}/rank/{}", self.base_url, user_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 404 {
            log::info!("⚠️ Participante {} aún no tiene tesoros", user_id);
            return Ok(None);
        }

        parse_ok(response).await.map(Some)
    }

    /// Clasificación completa, ya ordenada por el servidor
    pub async fn fetch_rankings(&self) -> Result<Vec<RankEntry>, ApiError> {
        let url = format!("{}/rank", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_ok(response).await
    }

    /// QR imprimible de un tesoro
    pub async fn fetch_treasure_image(&self, treasure_id: i64) -> Result<QrImage, ApiError> {
        let url = format!("{}/treasure/{}", self.base_url, treasure_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_ok(response).await
    }

    /// QR imprimible de un participante
    pub async fn fetch_user_image(&self, user_id: i64) -> Result<QrImage, ApiError> {
        let url = format!("{}/user/{}", self.base_url, user_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        parse_ok(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_message_reaches_the_toast() {
        let err = ApiError::Server {
            status: 409,
            message: "already found".to_string(),
        };
        assert_eq!(err.toast_message(), "already found");
        assert!(!err.is_not_found());
    }

    #[test]
    fn network_error_uses_generic_toast() {
        let err = ApiError::Network("fetch failed".to_string());
        assert_eq!(
            err.toast_message(),
            "네트워크 오류가 발생했습니다. 다시 시도해주세요."
        );
    }

    #[test]
    fn not_found_is_distinguishable() {
        let err = ApiError::Server {
            status: 404,
            message: FALLBACK_SERVER_MSG.to_string(),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn client_builds_with_configured_base() {
        let client = ApiClient::with_base_url("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
        assert!(!ApiClient::new().base_url.is_empty());
    }
}
