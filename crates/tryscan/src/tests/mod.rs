mod property_backtracking;
mod utils;
