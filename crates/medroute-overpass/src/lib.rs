pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod resolver;
pub mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use query::hospital_query;
pub use resolver::{
    find_nearest_hospitals, HospitalResolver, HospitalSource, ResolutionRequest,
    ResolutionResult, ResolutionSource,
};
pub use types::{ElementType, OverpassElement, OverpassResponse};
