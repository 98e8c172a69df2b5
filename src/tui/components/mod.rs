pub mod accounts_table;
pub mod header;
pub mod help;
pub mod toasts;
