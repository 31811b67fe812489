//! different utility modules used throughout the project
/// logging setup and saving of solution steps into file
pub mod logger;
/// parse task document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into functions
pub mod task_parser;
///
mod task_parser_tests;
