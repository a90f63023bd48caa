pub mod application {
    pub mod receipt {
        pub mod process;
    }
}

pub mod domain {
    pub mod logger;
    pub mod receipt {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod process;
        }
    }
}
