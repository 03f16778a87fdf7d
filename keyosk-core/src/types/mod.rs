pub mod direction;
pub mod keys;
pub mod klc;
pub mod layout;

pub use direction::*;
pub use keys::*;
pub use klc::*;
pub use layout::*;
