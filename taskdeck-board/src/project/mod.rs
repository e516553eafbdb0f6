//! Project operations

mod init;
mod member;

pub use init::InitProject;
pub use member::{JoinProject, RegisterMember};
