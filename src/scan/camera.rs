use serde::{Deserialize, Serialize};

/// Cámara enumerada por la capa JS (html5-qrcode).
/// La lista es inmutable una vez enumerada; solo cambia la selección actual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraDevice {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

/// Etiquetas que identifican una cámara trasera, en inglés y coreano.
const REAR_LABELS: [&str; 4] = ["back", "rear", "환경", "후면"];

/// Selección por defecto: preferir una cámara trasera por etiqueta;
/// si ninguna coincide, la última enumerada (suele ser la trasera en móviles).
pub fn find_rear_camera(devices: &[CameraDevice]) -> Option<&CameraDevice> {
    let rear = devices.iter().find(|camera| {
        let label = camera.label.to_lowercase();
        REAR_LABELS.iter().any(|kw| label.contains(kw))
    });
    rear.or_else(|| devices.last())
}

/// Siguiente cámara en orden de enumeración, con wrap-around.
/// Con menos de dos cámaras no hay nada que cambiar.
pub fn next_camera<'a>(
    devices: &'a [CameraDevice],
    current_id: Option<&str>,
) -> Option<&'a CameraDevice> {
    if devices.len() < 2 {
        return None;
    }

    let current_index = current_id
        .and_then(|id| devices.iter().position(|camera| camera.id == id))
        .unwrap_or(0);

    devices.get((current_index + 1) % devices.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: &str, label: &str) -> CameraDevice {
        CameraDevice {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn prefers_back_facing_label() {
        let devices = vec![
            device("a", "Front Camera"),
            device("b", "Back Camera"),
            device("c", "Wide Lens"),
        ];
        assert_eq!(find_rear_camera(&devices).unwrap().id, "b");
    }

    #[test]
    fn recognizes_korean_labels() {
        let devices = vec![device("a", "전면 카메라"), device("b", "후면 카메라")];
        assert_eq!(find_rear_camera(&devices).unwrap().id, "b");

        let devices = vec![device("a", "카메라 (환경)"), device("b", "카메라")];
        assert_eq!(find_rear_camera(&devices).unwrap().id, "a");
    }

    #[test]
    fn falls_back_to_last_device() {
        let devices = vec![device("a", "Camera 1"), device("b", "Camera 2")];
        assert_eq!(find_rear_camera(&devices).unwrap().id, "b");
    }

    #[test]
    fn empty_list_has_no_default() {
        assert!(find_rear_camera(&[]).is_none());
    }

    #[test]
    fn switch_is_noop_with_fewer_than_two() {
        assert!(next_camera(&[], Some("a")).is_none());
        assert!(next_camera(&[device("a", "Cam")], Some("a")).is_none());
    }

    #[test]
    fn switch_moves_in_enumeration_order() {
        let devices = vec![device("a", ""), device("b", ""), device("c", "")];
        assert_eq!(next_camera(&devices, Some("b")).unwrap().id, "c");
    }

    #[test]
    fn switch_wraps_around() {
        let devices = vec![device("a", ""), device("b", ""), device("c", "")];
        assert_eq!(next_camera(&devices, Some("c")).unwrap().id, "a");
    }

    #[test]
    fn unknown_current_starts_from_first() {
        let devices = vec![device("a", ""), device("b", "")];
        assert_eq!(next_camera(&devices, Some("zzz")).unwrap().id, "b");
        assert_eq!(next_camera(&devices, None).unwrap().id, "b");
    }

    #[test]
    fn camera_json_from_js_glue() {
        // Formato que produce js/qr-scanner.js
        let json = r#"[{"id":"cam-1","label":"Back Camera"},{"id":"cam-2"}]"#;
        let devices: Vec<CameraDevice> = serde_json::from_str(json).unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].label, "Back Camera");
        assert_eq!(devices[1].label, "");
    }
}
