pub mod dass21;
pub mod ias;
