pub mod mapper;
pub mod parser;
pub mod transcript;
pub mod validator;
