pub mod host;
pub mod ip;
pub mod mac;
pub mod subnet;
