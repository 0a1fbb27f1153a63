//! 领域层
//!
//! 包含编码格式、库区结构、地址解析与校验，以及外部货位查询接口

pub mod entities;
pub mod enums;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use enums::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
