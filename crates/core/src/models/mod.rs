pub(crate) mod amount;
pub mod budget;
pub mod category;
pub mod export;
pub mod finance_data;
pub mod notification;
pub mod settings;
pub mod summary;
pub mod transaction;
