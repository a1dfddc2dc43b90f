pub mod dates;

pub use dates::parse_iso_date;
