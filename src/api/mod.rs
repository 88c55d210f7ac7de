pub mod analyze;
pub mod health;
pub mod page;

pub use analyze::{
    handle_analyze, AnalyzeErrorResponse, AnalyzeForm, AnalyzeResponse, ColorResponse,
    __path_handle_analyze,
};
pub use health::{handle_health, HealthResponse, __path_handle_health};
pub use page::handle_index;
