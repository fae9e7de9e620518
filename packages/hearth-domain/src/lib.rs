mod error;
mod filter;
mod principal;
mod visibility;

pub use error::{Error, Result};
pub use filter::{FilterExpr, FilterField, visibility_filter};
pub use principal::{Principal, Role};
pub use visibility::{ResourceView, Visibility, can_view};
