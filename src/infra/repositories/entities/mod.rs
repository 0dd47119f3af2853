//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod persona;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use persona::{ActiveModel as PersonaActiveModel, Entity as PersonaEntity, Model as PersonaModel};
