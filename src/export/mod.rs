pub mod csv_out;
pub mod share;

pub use csv_out::to_csv;
pub use share::{share_text, whatsapp_link};
