pub mod colors;
pub mod flash;
pub mod index;
pub mod upload;

pub use colors::{handle_colors, __path_handle_colors};
pub use flash::{take_flash, write_flash, FlashMessage, FLASH_COOKIE};
pub use index::handle_index;
pub use upload::{handle_upload, __path_handle_upload};
