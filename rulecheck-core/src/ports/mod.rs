pub mod model;

pub use model::{GenerationRequest, GenerationResponse, GenerativeModel};
