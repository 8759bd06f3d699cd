// Adapters layer: concrete bindings of the core to the outside world.

pub mod http;
