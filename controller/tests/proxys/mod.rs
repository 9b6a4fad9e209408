pub mod proxy_controller;
