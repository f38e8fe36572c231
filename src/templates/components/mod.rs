pub mod error;
pub mod pill;
pub mod property_card;

pub use error::error_page;
pub use pill::pill;
pub use property_card::property_card;
