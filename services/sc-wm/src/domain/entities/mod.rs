//! 实体模块

mod bin;
mod storage_structure;
mod zone;

pub use bin::{BinData, BinReference};
pub use storage_structure::{AisleConfig, StorageStructure, StructureProps};
pub use zone::Zone;
