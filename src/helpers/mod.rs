mod md5;
mod sha1;

pub use md5::Md5;
pub use sha1::Sha1;
