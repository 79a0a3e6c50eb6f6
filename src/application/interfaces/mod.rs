/// Contact service interface
pub mod contact;
/// Email service interface
pub mod email;
