pub mod ext;

pub use ext::{parse_ext_list, ExtensionSet, DEFAULT_EXTENSIONS};
