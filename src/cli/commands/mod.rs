pub mod extract;
pub mod extract_all;
mod helper;
pub mod init;
pub mod inspect;
