//! 게이트웨이 계층 로직 모듈

pub mod account_gateway;

pub use account_gateway::*;
