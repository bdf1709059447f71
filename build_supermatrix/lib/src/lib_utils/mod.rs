pub mod description;
pub mod error;
pub mod otu;
pub mod statistics;
pub mod struct_helper;
pub mod supermatrix;
