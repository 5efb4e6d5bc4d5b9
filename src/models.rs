// ============================================================================
// MODELS - Estructuras compartidas con el backend (api.bhohwa.click)
// ============================================================================

use serde::{Deserialize, Serialize};

/// GET /user?userCode=... -> {id, name}
/// El nombre puede venir vacío o ausente si el participante aún no se registró.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl User {
    /// ¿Tiene ya un nombre registrado? (espacios en blanco no cuentan)
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// POST /user/name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRequest {
    pub user_id: i64,
    pub name: String,
}

/// Respuesta de POST /user/name -> {userId, name}
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameResponse {
    pub user_id: i64,
    pub name: String,
}

/// POST /treasure/find
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindTreasureRequest {
    pub user_id: i64,
    pub treasure_code: String,
}

/// POST /user/found?userCode=... -> {id, foundCount}
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaughtUser {
    pub id: i64,
    pub found_count: u32,
}

/// GET /rank/{userId} -> {treasureCount, rank, score} (404 = sin tesoros aún)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub treasure_count: u32,
    pub rank: u32,
    pub score: i32,
}

/// GET /rank -> lista ordenada
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub id: i64,
    pub name: String,
    pub score: i32,
    pub treasure_count: u32,
}

/// GET /treasure/{id} y GET /user/{id}: QR en base64 para imprimir
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QrImage {
    pub id: i64,
    pub image: String,
}

/// Cuerpo de error del servidor: {message}
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// Navigation state entre /connect, /name y /scan.
/// Viaja por el history state del router, no por la URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectedUser {
    pub user_id: i64,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_without_name_needs_registration() {
        let user: User = serde_json::from_str(r#"{"id": 7, "name": ""}"#).unwrap();
        assert_eq!(user.id, 7);
        assert!(!user.has_name());

        // name ausente también cuenta como sin registrar
        let user: User = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert!(!user.has_name());

        let user: User = serde_json::from_str(r#"{"id": 7, "name": "   "}"#).unwrap();
        assert!(!user.has_name());
    }

    #[test]
    fn user_with_name_is_registered() {
        let user: User = serde_json::from_str(r#"{"id": 7, "name": "Kim"}"#).unwrap();
        assert!(user.has_name());
    }

    #[test]
    fn caught_user_uses_camel_case() {
        let caught: CaughtUser = serde_json::from_str(r#"{"id": 3, "foundCount": 4}"#).unwrap();
        assert_eq!(caught.found_count, 4);
    }

    #[test]
    fn stats_and_rank_wire_format() {
        let stats: UserStats =
            serde_json::from_str(r#"{"treasureCount": 2, "rank": 5, "score": 12}"#).unwrap();
        assert_eq!(stats.treasure_count, 2);

        let entry: RankEntry =
            serde_json::from_str(r#"{"id": 1, "name": "Kim", "score": 9, "treasureCount": 3}"#)
                .unwrap();
        assert_eq!(entry.treasure_count, 3);
    }

    #[test]
    fn requests_serialize_to_camel_case() {
        let body = serde_json::to_string(&FindTreasureRequest {
            user_id: 7,
            treasure_code: "T-42".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"userId":7,"treasureCode":"T-42"}"#);

        let body = serde_json::to_string(&NameRequest {
            user_id: 7,
            name: "Kim".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"userId":7,"name":"Kim"}"#);
    }
}
