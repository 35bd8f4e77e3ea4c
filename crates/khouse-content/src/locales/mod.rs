//! One content tree per supported language.

pub mod ar;
pub mod cn;
pub mod en;
pub mod jp;
pub mod th;
