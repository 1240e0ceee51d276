mod list;
mod login;
mod logout;
mod me;
mod owner_dogs;
mod register;

pub use list::*;
pub use login::*;
pub use logout::*;
pub use me::*;
pub use owner_dogs::*;
pub use register::*;
