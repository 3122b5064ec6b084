pub mod shared {
    pub mod core {
        pub mod pagination;
    }
    pub mod infrastructure {
        pub mod http {
            pub mod response;
        }
    }
}

pub mod modules {
    pub mod products {
        pub mod core {
            pub mod catalog;
            pub mod product;
            pub mod seed;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_products {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_product {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_categories {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_product {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_product {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_product {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod products;
                pub mod products_in_memory;
            }
        }
    }
}

pub mod shell;
