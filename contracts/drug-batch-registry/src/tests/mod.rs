pub mod utils;

mod queries;
