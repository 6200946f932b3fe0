pub mod activity_graph;
pub mod activity_table;
pub mod chart;
pub mod common_modal;
pub mod common_toast;
pub mod company_report;
pub mod sidebar;
pub mod user_table;
