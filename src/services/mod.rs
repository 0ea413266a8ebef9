pub mod notification;

pub use notification::notify_admin;
