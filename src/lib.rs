pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod scheduling {
        pub mod core {
            pub mod attendee;
            pub mod event;
            pub mod ids;
            pub mod time_phrase;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod create_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod respond_to_event {
                pub mod command;
                pub mod handler;
            }
            pub mod delete_event {
                pub mod handler;
            }
            pub mod list_events {
                pub mod handler;
            }
            pub mod show_responses {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod command_router;
                pub mod http;
            }
            pub mod outbound {
                pub mod event_store;
            }
        }
    }
}

pub mod shell;
