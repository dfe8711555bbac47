//! Current-user lookup as an injected capability.
//!
//! `whoami` never calls the host directly; it goes through [`Identity`] so
//! tests can substitute a fixed name.

/// Source of the invoking user's name.
pub trait Identity {
    /// Name of the current user.
    fn username(&self) -> String;
}

/// Identity as reported by the host environment.
///
/// Checks `USER` then `USERNAME`, matching what login shells export on
/// Unix and Windows respectively.
pub struct HostIdentity;

impl Identity for HostIdentity {
    fn username(&self) -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }
}
