pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{
    image_basename, image_file_name, is_valid_scope_tag, metadata_file_name, scope_dirs,
};
