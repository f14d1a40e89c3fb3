pub mod example_mapper;

pub use example_mapper::ExampleMapper;
