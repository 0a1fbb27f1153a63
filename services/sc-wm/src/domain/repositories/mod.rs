//! 仓储接口模块

mod bin_repository;

pub use bin_repository::BinRepository;

#[cfg(test)]
pub use bin_repository::MockBinRepository;
