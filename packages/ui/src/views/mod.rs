mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod sign_in;
pub use sign_in::SignInView;

mod sign_up;
pub use sign_up::SignUpView;

mod dashboard;
pub use dashboard::DashboardView;
