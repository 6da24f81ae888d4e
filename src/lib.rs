pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_repository;
                pub mod event_repository_in_memory;
            }
        }
    }
}

pub mod shell;
