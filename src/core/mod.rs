pub mod crawler;
pub mod parser;
pub mod presenter;
pub mod url_builder;
