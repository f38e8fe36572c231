pub mod home;

pub use home::{home_page, listings_grid, HomeVm};
