pub mod use_cooldown;
pub mod use_scanner;
pub mod use_toast;

pub use use_cooldown::{use_cooldown, UseCooldownHandle};
pub use use_scanner::{use_scanner, UseScannerHandle};
pub use use_toast::{use_toast, UseToastHandle};
