pub mod geoloc;
pub mod weather;
