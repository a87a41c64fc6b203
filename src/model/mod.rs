//! Pure state types owned by the app actor. Nothing here knows about channels.

pub mod cart;
pub mod load;
pub mod login;
pub mod modal;
pub mod page;

pub use cart::*;
pub use load::*;
pub use login::*;
pub use modal::*;
pub use page::*;
