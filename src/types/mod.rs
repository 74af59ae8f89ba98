pub mod bucket;
pub mod date_range;
pub mod record;
pub mod rental_field;
pub mod rental_frames;
pub mod season;
pub mod summary;
