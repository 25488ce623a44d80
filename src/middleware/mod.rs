pub mod gate;
pub mod response;

pub use gate::admin_gate;
pub use response::{ApiResponse, ApiResult};
