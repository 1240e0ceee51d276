#[macro_use]
mod text_enum;

mod dog_size;
mod new_user;
mod password;
mod role;
mod user_email;
mod username;
mod walk_status;

pub use dog_size::*;
pub use new_user::*;
pub use password::*;
pub use role::*;
pub use text_enum::InvalidVariant;
pub use user_email::*;
pub use username::*;
pub use walk_status::*;
