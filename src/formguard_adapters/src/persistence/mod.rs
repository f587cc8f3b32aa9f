pub mod hashmap_user_provider;

pub use hashmap_user_provider::HashMapUserProvider;
