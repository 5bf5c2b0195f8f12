pub mod use_loading;
pub mod use_pointer_kind;
