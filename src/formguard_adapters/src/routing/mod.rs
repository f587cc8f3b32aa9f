pub mod static_path_resolver;

pub use static_path_resolver::StaticPathResolver;
