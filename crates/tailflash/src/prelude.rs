//! Prelude for convenient imports.
//!
//! Re-exports what a typical page renderer needs in one line:
//!
//! ```rust
//! use tailflash::prelude::*;
//!
//! let mut flash = MemoryFlash::new();
//! flash.add("success", "Saved.");
//!
//! let html = AlertFlash::new()
//!     .icon_types(StyleTable::new().add("success", "fas fa-check"))
//!     .render(&flash);
//! assert!(html.contains("bg-green-600"));
//! ```

// Widget and its configuration
pub use crate::{AlertError, AlertFlash, StyleTable};

// Message sources
pub use crate::{FlashRecord, FlashStore, MemoryFlash};

// HTML attributes
pub use crate::{AttrValue, Attributes};
