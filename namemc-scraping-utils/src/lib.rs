pub mod config_file;
pub mod macros;

#[doc(hidden)]
pub mod __private {
    pub use once_cell;
    pub use scraper;
}
