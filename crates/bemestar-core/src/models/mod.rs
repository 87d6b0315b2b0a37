pub mod dass21;
pub mod ias;
pub mod record;
pub mod response;
pub mod result;
pub mod settings;
pub mod severity;
