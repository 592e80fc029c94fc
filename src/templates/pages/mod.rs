pub mod confirm_delete;
pub mod create;
pub mod details;
pub mod gallery;
pub mod home;
pub mod update;

pub use confirm_delete::confirm_delete_page;
pub use create::create_page;
pub use details::{details_content, details_page};
pub use gallery::{gallery_content, gallery_page};
pub use home::home_page;
pub use update::{update_content, update_page};
