pub mod speed_ext;
