pub mod date;
pub mod log;
pub mod slug;
pub mod url;
