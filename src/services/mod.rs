pub mod borders;
pub mod detail;
pub mod rest_countries;
