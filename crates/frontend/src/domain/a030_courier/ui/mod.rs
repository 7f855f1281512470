mod details_panel;
mod directory;
mod filter_form;
mod list;

pub use directory::CourierDirectory;
