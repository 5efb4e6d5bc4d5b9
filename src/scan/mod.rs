// Lógica pura de la sesión de escaneo: sin DOM, sin JS, testeable en nativo.

pub mod camera;
pub mod cooldown;
pub mod gate;

pub use camera::{find_rear_camera, next_camera, CameraDevice};
pub use cooldown::Cooldown;
pub use gate::{accept_catch, ScanGate};
