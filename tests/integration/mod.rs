mod parser_tests;
mod pipeline_tests;
