//! Value objects - immutable types that represent domain concepts

mod image_ref;
mod record_id;

pub use image_ref::ImageRef;
pub use record_id::RecordId;
