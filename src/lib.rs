// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests and the shell binary import modules from this crate root.

pub mod config;

pub mod core {
    pub mod ports;
    pub mod shift;
    pub mod week;
}

pub mod application {
    pub mod errors;
    pub mod tracker;
    pub mod view;
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_week_store;
    }
    pub mod json_file {
        pub mod json_file_week_store;
    }
}
