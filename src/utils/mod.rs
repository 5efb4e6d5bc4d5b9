// Utils compartidos

pub mod constants;
pub mod qr_ffi;

pub use constants::*;
