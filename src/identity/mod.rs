pub mod email;

pub use email::EmailHash;
