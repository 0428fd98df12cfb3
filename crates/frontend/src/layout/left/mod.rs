pub mod navbar;

pub use navbar::SideNav;
