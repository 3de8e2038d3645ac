pub mod contact;
pub mod email;
pub mod property;
pub mod theme;
