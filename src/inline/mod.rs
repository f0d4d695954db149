mod inline_query_handler;
mod pagination;

pub use inline_query_handler::inline_query_handler_wrapper;
