//! Application pages module
//!
//! - Home page (the product page with its metadata)
//! - Not found page

mod home;
mod not_found;
mod product;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use product::ProductPage;
