pub mod pe12;
pub mod pe16;
pub mod pe20;
