//! Common error infrastructure for compendium-core.
//!
//! The catch calculator itself never fails: every edge case degrades to a
//! numeric default. Errors only arise when static data (multiplier tables) is
//! assembled or validated, and those errors are defined next to the types they
//! validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each data source has its own error type with specific variants
//! - **Stable Codes**: Every variant maps to a static string for logs and tests

/// Common trait for all compendium-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
pub trait CompendiumError: core::fmt::Display + core::fmt::Debug {
    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
