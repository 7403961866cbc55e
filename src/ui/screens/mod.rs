pub(crate) mod catalog;
pub(crate) mod generate;
pub(crate) mod insights;
pub(crate) mod query;
pub(crate) mod table;
pub(crate) mod view;
