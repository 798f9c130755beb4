pub mod analysis_response;
pub mod application;
pub mod request;

pub use self::analysis_response::*;
pub use self::application::*;
pub use self::request::*;
