pub mod medals;
