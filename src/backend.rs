//! 后端操作表
//!
//! 具体文件系统通过实现 [`XattrBackend`] 提供扩展属性逻辑。
//! 所有方法都有返回 `NotImplemented` 的默认实现，
//! 因此一个完全不支持扩展属性的文件系统可以直接使用 [`NullBackend`]。
//!
//! # 示例
//!
//! ```rust,ignore
//! use xattr_bridge::{XattrBackend, XattrReply, NodeId, Result};
//! use xattr_bridge::wire::GetxattrIn;
//!
//! struct MyFs {
//!     // ...
//! }
//!
//! impl XattrBackend for MyFs {
//!     fn getxattr(&self, node: NodeId, arg: &GetxattrIn, name: &[u8], reply: XattrReply<'_>) -> Result<usize> {
//!         let value = self.lookup(node, name)?;
//!         reply.reply(value)
//!     }
//! }
//! ```

use crate::error::{Error, ErrorKind, Result};
use crate::types::NodeId;
use crate::wire::{GetxattrIn, GetxattrOut, SetxattrIn};

/// getxattr / listxattr 的输出描述符
///
/// 两种模式共用一次后端调用，区别只在于接入的是哪个描述符：
/// - `Size` - 查询模式，后端把所需大小写入小的固定描述符
/// - `Data` - 填充模式，后端直接写入调用方缓冲区
#[derive(Debug)]
pub enum XattrReply<'a> {
    /// 查询模式
    Size(&'a mut GetxattrOut),
    /// 填充模式
    Data(&'a mut [u8]),
}

impl XattrReply<'_> {
    /// 以完整数据回复
    ///
    /// 查询模式下记录数据长度；填充模式下复制数据，
    /// 缓冲区不足时返回 `OutOfRange` 且不写入任何字节
    ///
    /// # 返回
    ///
    /// 查询模式返回 0，填充模式返回写入的字节数
    pub fn reply(self, data: &[u8]) -> Result<usize> {
        match self {
            XattrReply::Size(out) => {
                out.size = u32::try_from(data.len()).unwrap_or(u32::MAX);
                Ok(0)
            }
            XattrReply::Data(buf) => {
                if data.len() > buf.len() {
                    return Err(Error::new(ErrorKind::OutOfRange, "reply buffer too small"));
                }
                buf[..data.len()].copy_from_slice(data);
                Ok(data.len())
            }
        }
    }

    /// 是否为查询模式
    pub fn is_size_query(&self) -> bool {
        matches!(self, XattrReply::Size(_))
    }
}

/// 后端扩展属性操作表
///
/// 对应 FUSE 低层接口中的 setxattr / getxattr / listxattr / removexattr。
/// 方法以 `&self` 调用，同一节点上的并发调用由后端自行串行化。
pub trait XattrBackend {
    /// 设置属性值
    ///
    /// # 参数
    ///
    /// * `node` - 节点
    /// * `arg` - 值长度和创建语义
    /// * `name` - 属性名（含命名空间前缀，不含 NUL）
    /// * `value` - 属性值
    fn setxattr(&self, node: NodeId, arg: &SetxattrIn, name: &[u8], value: &[u8]) -> Result<()> {
        let _ = (node, arg, name, value);
        Err(Error::new(ErrorKind::NotImplemented, "setxattr not implemented"))
    }

    /// 读取属性值
    ///
    /// 查询模式下把值长度写入 `reply`；填充模式下值比缓冲区大时必须失败，
    /// 不能部分写入
    ///
    /// # 返回
    ///
    /// 填充模式下返回写入的字节数
    fn getxattr(&self, node: NodeId, arg: &GetxattrIn, name: &[u8], reply: XattrReply<'_>) -> Result<usize> {
        let _ = (node, arg, name, reply);
        Err(Error::new(ErrorKind::NotImplemented, "getxattr not implemented"))
    }

    /// 列出属性名
    ///
    /// 填充模式下写入以 NUL 结尾的名称序列
    ///
    /// # 返回
    ///
    /// 填充模式下返回写入的字节数
    fn listxattr(&self, node: NodeId, arg: &GetxattrIn, reply: XattrReply<'_>) -> Result<usize> {
        let _ = (node, arg, reply);
        Err(Error::new(ErrorKind::NotImplemented, "listxattr not implemented"))
    }

    /// 删除属性
    fn removexattr(&self, node: NodeId, name: &[u8]) -> Result<()> {
        let _ = (node, name);
        Err(Error::new(ErrorKind::NotImplemented, "removexattr not implemented"))
    }
}

/// 不支持任何扩展属性操作的后端
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl XattrBackend for NullBackend {}

impl<B: XattrBackend + ?Sized> XattrBackend for &B {
    fn setxattr(&self, node: NodeId, arg: &SetxattrIn, name: &[u8], value: &[u8]) -> Result<()> {
        (**self).setxattr(node, arg, name, value)
    }

    fn getxattr(&self, node: NodeId, arg: &GetxattrIn, name: &[u8], reply: XattrReply<'_>) -> Result<usize> {
        (**self).getxattr(node, arg, name, reply)
    }

    fn listxattr(&self, node: NodeId, arg: &GetxattrIn, reply: XattrReply<'_>) -> Result<usize> {
        (**self).listxattr(node, arg, reply)
    }

    fn removexattr(&self, node: NodeId, name: &[u8]) -> Result<()> {
        (**self).removexattr(node, name)
    }
}
