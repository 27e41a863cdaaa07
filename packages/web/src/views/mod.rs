mod home;
pub use home::Home;

mod signin;
pub use signin::SignIn;

mod signup;
pub use signup::SignUp;

mod not_found;
pub use not_found::NotFound;
