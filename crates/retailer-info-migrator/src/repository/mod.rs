//! 数据库仓储层
//!
//! 封装 retailer_info 表的读取与写回。
//!
//! ## 设计原则
//!
//! - 仓储只负责数据持久化，不包含合并逻辑
//! - 连接池由调用方创建并注入，不使用全局连接
//! - 定义 trait 接口以支持 mock 测试

mod retailer_info_repo;
mod traits;

pub use retailer_info_repo::RetailerInfoRepository;
pub use traits::*;
