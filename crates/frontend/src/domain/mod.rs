pub mod a001_rack;
pub mod a002_collection;
pub mod a003_age;
pub mod a004_family;
pub mod a005_drawer;
pub mod a006_map_location;
pub mod a007_acquisition;
