//! Infrastructure layer: collaborator implementations and DI container
//!
//! This layer implements the collaborator traits and wires up services.

pub mod di;
pub mod traits;

pub use di::ServiceContainer;
pub use traits::{
    CatalogTranslator, IdentityTranslator, MenuContributor, StaticModule, Translator,
};
