pub mod convert_js;
pub mod vector_js;
