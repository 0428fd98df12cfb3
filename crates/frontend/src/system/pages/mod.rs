//! Placeholder destination pages behind the side navigation links.

mod applications;
mod business_demo_templates;
mod not_found;
mod services_catalog;
mod technical_templates;

pub use applications::ApplicationsPage;
pub use business_demo_templates::BusinessDemoTemplatesPage;
pub use not_found::NotFoundPage;
pub use services_catalog::ServicesCatalogPage;
pub use technical_templates::TechnicalTemplatesPage;
