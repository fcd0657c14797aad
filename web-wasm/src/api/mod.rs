//! バックエンドAPI連携

pub mod client;
