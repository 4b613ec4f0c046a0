//! Client-side state for the management screens: an API client over the REST
//! facade and one [`EntityStore`] per entity driving list, search and form
//! lifecycles.

pub mod api;
pub mod store;

pub use api::{ApiClient, ClientError};
pub use store::{Classes, Courses, Degrees, Deletable, EntityStore, NoLookup, Resource, Students, Teachers};
