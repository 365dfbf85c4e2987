//! xattr 处理器注册
//!
//! 宿主按属性名前缀把请求分派给处理器。处理器表是一个有序列表，
//! 按顺序尝试，第一个前缀匹配的处理器胜出：
//!
//! - 默认处理器 [`ConnectionHandler`] 拥有空前缀，接收其他处理器未认领的所有名称
//! - ACL 变体在默认处理器之前串联两个外部提供的 POSIX ACL 处理器
//!
//! 前缀以 '.' 结尾（或为空）时按前缀匹配，否则视为完整属性名，必须精确相等。

use crate::{
    Result, Error, ErrorKind,
    backend::XattrBackend,
    conn::{Connection, XattrHost},
    types::{NodeId, SetFlags, XattrBuf},
};
use alloc::boxed::Box;
use alloc::vec::Vec;

/// 属性处理器
///
/// 处理器收到的是完整属性名（含前缀）
pub trait XattrHandler {
    /// 处理器认领的名称前缀
    fn prefix(&self) -> &str;

    /// 读取属性
    fn get(&self, node: NodeId, name: &[u8], buf: XattrBuf<'_>) -> Result<usize>;

    /// 设置属性，`value` 为 `None` 时删除
    fn set(&self, node: NodeId, name: &[u8], value: Option<&[u8]>, flags: SetFlags) -> Result<()>;
}

/// 前缀是否匹配名称
fn handler_matches(prefix: &str, name: &[u8]) -> Result<bool> {
    let prefix = prefix.as_bytes();
    if prefix.is_empty() {
        return Ok(true);
    }
    if prefix.ends_with(b".") {
        if !name.starts_with(prefix) {
            return Ok(false);
        }
        if name.len() == prefix.len() {
            return Err(Error::new(ErrorKind::InvalidInput, "xattr name has empty suffix"));
        }
        return Ok(true);
    }
    Ok(name == prefix)
}

/// 默认处理器，把请求转给连接上的调度器
pub struct ConnectionHandler<'c, B: XattrBackend, H: XattrHost> {
    conn: &'c Connection<B, H>,
}

impl<'c, B: XattrBackend, H: XattrHost> ConnectionHandler<'c, B, H> {
    /// 为连接创建默认处理器
    pub fn new(conn: &'c Connection<B, H>) -> Self {
        Self { conn }
    }
}

impl<B: XattrBackend, H: XattrHost> XattrHandler for ConnectionHandler<'_, B, H> {
    fn prefix(&self) -> &str {
        ""
    }

    fn get(&self, node: NodeId, name: &[u8], buf: XattrBuf<'_>) -> Result<usize> {
        self.conn.get_attribute(node, name, buf)
    }

    fn set(&self, node: NodeId, name: &[u8], value: Option<&[u8]>, flags: SetFlags) -> Result<()> {
        self.conn.set_attribute(node, name, value, flags)
    }
}

/// 外部提供的 POSIX ACL 处理器（access + default）
pub struct AclHandlers<'a> {
    /// system.posix_acl_access
    pub access: Box<dyn XattrHandler + 'a>,
    /// system.posix_acl_default
    pub default: Box<dyn XattrHandler + 'a>,
}

/// 有序的处理器表
#[derive(Default)]
pub struct XattrHandlerTable<'a> {
    handlers: Vec<Box<dyn XattrHandler + 'a>>,
}

impl<'a> XattrHandlerTable<'a> {
    /// 创建空表
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// 只含默认处理器的表
    pub fn standard(fallback: Box<dyn XattrHandler + 'a>) -> Self {
        let mut table = Self::new();
        table.register(fallback);
        table
    }

    /// ACL 处理器在前、默认处理器在后的表
    pub fn with_posix_acl(acl: AclHandlers<'a>, fallback: Box<dyn XattrHandler + 'a>) -> Self {
        let mut table = Self::new();
        table.register(acl.access).register(acl.default).register(fallback);
        table
    }

    /// 在表尾追加处理器
    pub fn register(&mut self, handler: Box<dyn XattrHandler + 'a>) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    /// 处理器数量
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// 表是否为空
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// 按顺序列出各处理器的前缀
    pub fn prefixes(&self) -> impl Iterator<Item = &str> + '_ {
        self.handlers.iter().map(|handler| handler.prefix())
    }

    /// 为属性名选择处理器
    ///
    /// 没有处理器认领时返回 `Unsupported`
    pub fn resolve(&self, name: &[u8]) -> Result<&(dyn XattrHandler + 'a)> {
        for handler in &self.handlers {
            if handler_matches(handler.prefix(), name)? {
                return Ok(handler.as_ref());
            }
        }
        Err(Error::new(ErrorKind::Unsupported, "no xattr handler for name"))
    }

    /// 经处理器读取属性
    pub fn get(&self, node: NodeId, name: &[u8], buf: XattrBuf<'_>) -> Result<usize> {
        self.resolve(name)?.get(node, name, buf)
    }

    /// 经处理器设置或删除属性
    pub fn set(&self, node: NodeId, name: &[u8], value: Option<&[u8]>, flags: SetFlags) -> Result<()> {
        self.resolve(name)?.set(node, name, value, flags)
    }
}

impl<B: XattrBackend, H: XattrHost> Connection<B, H> {
    /// 按挂载配置构建处理器表
    ///
    /// `posix_acl` 开启时使用调用方提供的 ACL 处理器；
    /// 未开启时忽略它们
    pub fn handlers<'a>(&'a self, acl: Option<AclHandlers<'a>>) -> XattrHandlerTable<'a>
    where
        B: 'a,
        H: 'a,
    {
        let fallback: Box<dyn XattrHandler + 'a> = Box::new(ConnectionHandler::new(self));
        match acl {
            Some(acl) if self.config().posix_acl => XattrHandlerTable::with_posix_acl(acl, fallback),
            None if self.config().posix_acl => {
                log::warn!("[XATTR] posix_acl enabled but no ACL handlers supplied");
                XattrHandlerTable::standard(fallback)
            }
            _ => XattrHandlerTable::standard(fallback),
        }
    }
}
