//! xattr_bridge: 可插拔文件系统后端的扩展属性桥接层
//!
//! 位于宿主的文件访问层和具体文件系统后端之间，提供：
//! - **双模式缓冲区协议** - 查询所需大小 / 填充调用方缓冲区
//! - **每连接能力缓存** - 记住后端未实现的操作
//! - **属性列表校验** - 不信任后端返回的列表
//! - **处理器注册** - 按名称前缀分派，可选 POSIX ACL 处理器
//! - **可选的 C API 兼容层**
//!
//! # 示例
//!
//! ```rust,ignore
//! use xattr_bridge::{Connection, NodeId, XattrBackend, XattrBuf, XattrHost, Result};
//!
//! // 实现 XattrBackend trait
//! struct MyFs {
//!     // ...
//! }
//!
//! impl XattrBackend for MyFs {
//!     // 实现需要的方法，其余保持默认（未实现）
//!     // ...
//! }
//!
//! fn main() -> Result<()> {
//!     let conn = Connection::new(MyFs::new(), MyHost);
//!
//!     let size = conn.list_attributes(NodeId(1), XattrBuf::Query)?;
//!     let mut list = vec![0u8; size];
//!     conn.list_attributes(NodeId(1), XattrBuf::Fill(&mut list))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # 模块结构
//!
//! - [`error`] - 错误类型定义
//! - [`consts`] - 常量定义
//! - [`types`] - 基础数据类型
//! - [`wire`] - 请求记录
//! - [`backend`] - 后端操作表
//! - [`conn`] - 连接与能力缓存
//! - [`xattr`] - 调度器、列表校验和处理器注册
//! - [`c_api`] - C API 兼容层（可选）

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

// ===== 核心模块 =====

/// 错误处理
pub mod error;

/// 常量定义
pub mod consts;

/// 基础数据类型
pub mod types;

/// 请求记录（FUSE 兼容布局）
pub mod wire;

/// 后端操作表
pub mod backend;

/// 连接
pub mod conn;

/// Extended Attributes (xattr)
pub mod xattr;

// ===== C API 兼容层（可选）=====

/// C API 兼容层
///
/// 提供返回负 errno 的函数接口。
#[cfg(feature = "c-api")]
pub mod c_api;

// ===== 公共导出 =====

// 错误处理
pub use error::{Error, ErrorKind, Result};

// 基础类型
pub use types::{NodeId, SetFlags, XattrBuf, XattrOp, XattrOps};

// 后端
pub use backend::{NullBackend, XattrBackend, XattrReply};

// 连接
pub use conn::{CapabilityCache, ConnConfig, Connection, NoopHost, XattrHost};

// Xattr
pub use xattr::{
    AclHandlers, ConnectionHandler, XattrHandler, XattrHandlerTable, XattrName,
    verify_xattr_list,
};

// 上限
pub use consts::{XATTR_LIST_MAX, XATTR_NAME_MAX, XATTR_SIZE_MAX};

// C API（当启用时）
#[cfg(feature = "c-api")]
pub use c_api::xattr::{xattr_get, xattr_list, xattr_remove, xattr_set};
