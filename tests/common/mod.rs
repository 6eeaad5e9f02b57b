pub mod synthetic_lines;
