mod modal_overlay;
pub use modal_overlay::{ConfirmationModal, ModalOverlay};

mod paginator;
pub use paginator::Paginator;

mod error_banner;
pub use error_banner::{ErrorBanner, Loading};
