//! 扩展属性 (Extended Attributes) 桥接
//!
//! 这个模块把宿主的扩展属性请求转给后端，同时负责三件后端不必各自实现的事：
//!
//! - **双模式缓冲区协议** - 一次调用既可以查询所需大小，也可以填充缓冲区
//! - **能力缓存** - 后端报告"未实现"后，该连接上不再调用此操作
//! - **列表校验** - 后端返回的属性列表在交回宿主前检查完整性
//!
//! # 命名空间
//!
//! - **user.** - 用户自定义属性
//! - **system.** - 系统属性（如 ACL）
//! - **security.** - 安全标签（如 SELinux）
//! - **trusted.** - 可信属性
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use xattr_bridge::{Connection, NodeId, SetFlags, XattrBuf};
//!
//! let conn = Connection::new(my_backend, my_host);
//! let node = NodeId(42);
//!
//! // 设置属性
//! conn.set_attribute(node, b"user.author", Some(b"Alice"), SetFlags::empty())?;
//!
//! // 先查询大小，再读取
//! let size = conn.get_attribute(node, b"user.author", XattrBuf::Query)?;
//! let mut buf = vec![0u8; size];
//! let len = conn.get_attribute(node, b"user.author", XattrBuf::Fill(&mut buf))?;
//!
//! // 列出所有属性
//! let mut list = vec![0u8; 1024];
//! let len = conn.list_attributes(node, XattrBuf::Fill(&mut list))?;
//!
//! // 删除属性
//! conn.remove_attribute(node, b"user.author")?;
//! ```

mod name;
mod reply;
mod verify;
mod api;
mod handler;

#[cfg(test)]
pub(crate) mod mock;

pub use handler::{AclHandlers, ConnectionHandler, XattrHandler, XattrHandlerTable};
pub use name::XattrName;
pub use verify::verify_xattr_list;
