//! Generic UI chrome: toasts and the loading overlay.

pub mod loading;
pub mod toast;

pub use loading::LoadingOverlay;
pub use toast::ToastHost;
