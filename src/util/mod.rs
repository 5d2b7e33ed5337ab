pub mod path;

pub use path::{calculate_display_path, expand_tilde};
