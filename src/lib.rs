pub mod config;

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod ideas {
        pub mod core {
            pub mod decision;
            pub mod display;
            pub mod idea;
        }
        pub mod application {
            pub mod lifecycle;
        }
        pub mod use_cases {
            pub mod submit_idea {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod approve_idea {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod reject_idea {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod revert_idea {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_status {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod patch_idea {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_idea {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod idea_by_id {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_ideas {
                pub mod query;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_ideas {
                pub mod csv;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod dashboard {
                pub mod stats;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod migrate_fields {
                pub mod mappings;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod responses;
            }
        }
    }
    pub mod reference_data {
        pub mod core {
            pub mod directory;
            pub mod vocabularies;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
        }
    }
}

pub mod shell;
