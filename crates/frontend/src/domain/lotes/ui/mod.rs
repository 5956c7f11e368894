mod advertencias;
mod form;
mod list;

pub use list::LotesPage;
