pub mod drill;
pub mod request;
pub mod session;

pub use drill::*;
pub use request::*;
pub use session::*;
