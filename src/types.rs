//! 基础数据类型
//!
//! 节点标识、操作种类、设置标志以及调用方缓冲区的两种模式。

use bitflags::bitflags;
use core::fmt;

/// 后端节点标识
///
/// 由后端分配和拥有，本层只按编号引用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

impl NodeId {
    /// 根节点（与 FUSE 的 `FUSE_ROOT_ID` 一致）
    pub const ROOT: NodeId = NodeId(1);
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 扩展属性操作种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum XattrOp {
    /// setxattr
    Set = 0,
    /// getxattr
    Get = 1,
    /// listxattr
    List = 2,
    /// removexattr
    Remove = 3,
}

impl XattrOp {
    /// 操作种类数量
    pub const COUNT: usize = 4;

    /// 全部操作，按索引顺序
    pub const ALL: [XattrOp; Self::COUNT] = [XattrOp::Set, XattrOp::Get, XattrOp::List, XattrOp::Remove];

    /// 在能力表中的索引
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 对应的单个标志位
    pub const fn as_ops(self) -> XattrOps {
        match self {
            XattrOp::Set => XattrOps::SET,
            XattrOp::Get => XattrOps::GET,
            XattrOp::List => XattrOps::LIST,
            XattrOp::Remove => XattrOps::REMOVE,
        }
    }

    /// 操作名称（用于日志）
    pub const fn name(self) -> &'static str {
        match self {
            XattrOp::Set => "setxattr",
            XattrOp::Get => "getxattr",
            XattrOp::List => "listxattr",
            XattrOp::Remove => "removexattr",
        }
    }
}

bitflags! {
    /// 操作集合
    ///
    /// 用于挂载配置和能力快照
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct XattrOps: u8 {
        /// setxattr
        const SET    = 0x01;
        /// getxattr
        const GET    = 0x02;
        /// listxattr
        const LIST   = 0x04;
        /// removexattr
        const REMOVE = 0x08;
    }
}

impl XattrOps {
    /// 遍历集合中的操作
    pub fn iter_ops(self) -> impl Iterator<Item = XattrOp> {
        XattrOp::ALL.into_iter().filter(move |op| self.contains(op.as_ops()))
    }
}

bitflags! {
    /// setxattr 的创建语义
    ///
    /// 与 Linux 的 `XATTR_CREATE` / `XATTR_REPLACE` 取值一致。
    /// 空集合表示"不存在则创建，存在则替换"。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SetFlags: u32 {
        /// 仅创建，属性已存在时失败
        const CREATE  = 0x1;
        /// 仅替换，属性不存在时失败
        const REPLACE = 0x2;
    }
}

impl SetFlags {
    /// 两个互斥标志不能同时出现
    pub fn is_valid(self) -> bool {
        !self.contains(SetFlags::CREATE | SetFlags::REPLACE)
    }
}

/// 调用方缓冲区
///
/// get/list 的两种调用模式：
/// - `Query` - 只询问需要多大的缓冲区
/// - `Fill` - 把数据写入调用方提供的缓冲区
///
/// 空的 `Fill` 缓冲区等同于 `Query`（宿主以 size == 0 表示查询）
#[derive(Debug)]
pub enum XattrBuf<'a> {
    /// 查询所需大小
    Query,
    /// 填充调用方缓冲区
    Fill(&'a mut [u8]),
}

impl<'a> XattrBuf<'a> {
    /// 从宿主的"可选缓冲区"形式构造
    pub fn from_option(buf: Option<&'a mut [u8]>) -> Self {
        match buf {
            Some(buf) if !buf.is_empty() => XattrBuf::Fill(buf),
            _ => XattrBuf::Query,
        }
    }

    /// 宿主视角的 size 参数
    pub fn size(&self) -> usize {
        match self {
            XattrBuf::Query => 0,
            XattrBuf::Fill(buf) => buf.len(),
        }
    }

    /// 是否为查询模式
    pub fn is_query(&self) -> bool {
        self.size() == 0
    }
}
