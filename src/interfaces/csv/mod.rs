pub mod script_reader;
