pub mod contact;
pub mod email_address;
mod macros;
pub mod newsletter;
pub mod property;
pub mod theme;
pub mod ui;
