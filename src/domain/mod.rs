//! Domain layer: the menu tree and its algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod cursor;
pub mod display;
pub mod error;
pub mod fragment;
pub mod node;
pub mod properties;

pub use cursor::{DepthFirst, MenuCursor, MenuItemRef};
pub use display::MenuTreeConvert;
pub use error::{MenuError, MenuErrorKind, MenuResult};
pub use fragment::{flatten_configs, MenuSection};
pub use node::{next_conflict_key, MenuNode, SubMenus, PATH_SEPARATOR};
pub use properties::{MenuProperties, PropertyValue, DEFAULT_PRIORITY, PROPERTY_KEYS};
