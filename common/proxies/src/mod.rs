#![no_std]

pub mod proxy_index_source;
pub mod proxy_market;
pub mod proxy_price_adapter;
pub mod proxy_price_feed;
pub mod proxy_twap_factory;
pub mod proxy_twap_pool;
