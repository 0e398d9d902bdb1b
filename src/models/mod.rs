// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Contact, Gender, QueryResult, ResultOrder};
pub use requests::{parse_coordinate, CloseContactParams, GenderFilter, QueryRequest};
pub use responses::{Envelope, HealthResponse};
