pub mod allocation_service;
pub mod chart_service;
pub mod export_service;
pub mod input_service;
pub mod summary_service;
