pub mod budget;
pub mod category;
pub mod group;
pub mod invite;
pub mod spending;
pub mod user;

pub use budget::Budget;
pub use category::Category;
pub use group::Group;
pub use invite::SendInvite;
pub use spending::Spending;
pub use user::{Credentials, Session};
