pub mod loader;
pub mod record;
pub mod value;

pub use loader::{find_catalogs, load};
pub use record::{CatalogMetadata, Record, RecordSet};
pub use value::Value;
