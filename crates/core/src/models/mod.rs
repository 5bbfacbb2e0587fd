pub mod budget;
pub mod bucket;
pub mod category;
pub mod chart;
pub mod expense;
pub mod settings;
pub mod summary;
