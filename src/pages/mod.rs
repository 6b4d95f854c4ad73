mod dashboard;
mod expenses;
mod home;
mod inventory;
mod pricing;
mod sales;
mod schemes;

pub use dashboard::DashboardPage;
pub use expenses::ExpensesPage;
pub use home::HomePage;
pub use inventory::InventoryPage;
pub use pricing::SmartPricingPage;
pub use sales::SalesPage;
pub use schemes::SchemesPage;
