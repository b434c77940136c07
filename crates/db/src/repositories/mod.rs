pub mod city_repo;

pub use city_repo::CityRepo;
