//! xattr 调度器
//!
//! 四个公共操作（set/get/list/remove），每个都遵循同样的框架：
//!
//! 1. 校验属性名
//! 2. （仅 list）调用进程权限预检
//! 3. 能力缓存短路
//! 4. 构造请求记录并调用后端
//! 5. 后端返回"未实现"时标记能力并转换为 `Unsupported`，其他错误原样返回
//! 6. 修改成功后通知宿主使属性失效并更新 ctime

use crate::{
    Result, Error, ErrorKind,
    backend::XattrBackend,
    conn::{Connection, XattrHost},
    consts::{XATTR_LIST_MAX, XATTR_SIZE_MAX},
    types::{NodeId, SetFlags, XattrBuf, XattrOp},
    wire::SetxattrIn,
};

use super::name::XattrName;
use super::reply::{call_dual_mode, Reply};
use super::verify::verify_xattr_list;

impl<B: XattrBackend, H: XattrHost> Connection<B, H> {
    /// 设置扩展属性
    ///
    /// 对应 FUSE 的 `FUSE_SETXATTR`
    ///
    /// # 参数
    ///
    /// * `node` - 节点
    /// * `name` - 属性名（含前缀，如 "user.comment"）
    /// * `value` - 属性值；`None` 表示删除，等同于 [`remove_attribute`](Self::remove_attribute)
    /// * `flags` - 创建语义
    ///
    /// # 示例
    ///
    /// ```ignore
    /// conn.set_attribute(node, b"user.author", Some(b"Alice"), SetFlags::empty())?;
    /// ```
    pub fn set_attribute(
        &self,
        node: NodeId,
        name: &[u8],
        value: Option<&[u8]>,
        flags: SetFlags,
    ) -> Result<()> {
        let Some(value) = value else {
            return self.remove_attribute(node, name);
        };

        let name = XattrName::new(name)?;
        if !flags.is_valid() {
            return Err(Error::new(ErrorKind::InvalidInput, "XATTR_CREATE and XATTR_REPLACE both set"));
        }
        if value.len() > XATTR_SIZE_MAX {
            return Err(Error::new(ErrorKind::TooBig, "xattr value too large"));
        }
        self.check_supported(XattrOp::Set)?;

        let arg = SetxattrIn::new(value.len(), flags);
        let result = self.backend().setxattr(node, &arg, name.as_bytes(), value);
        self.map_not_implemented(XattrOp::Set, result)?;

        self.notify_changed(node);
        Ok(())
    }

    /// 获取扩展属性值
    ///
    /// 对应 FUSE 的 `FUSE_GETXATTR`
    ///
    /// # 返回
    ///
    /// - `XattrBuf::Query`：所需缓冲区大小（不超过 `XATTR_SIZE_MAX`）
    /// - `XattrBuf::Fill`：写入的字节数
    ///
    /// # 示例
    ///
    /// ```ignore
    /// let size = conn.get_attribute(node, b"user.comment", XattrBuf::Query)?;
    /// let mut buffer = vec![0u8; size];
    /// let len = conn.get_attribute(node, b"user.comment", XattrBuf::Fill(&mut buffer))?;
    /// ```
    pub fn get_attribute(&self, node: NodeId, name: &[u8], buf: XattrBuf<'_>) -> Result<usize> {
        let name = XattrName::new(name)?;
        self.check_supported(XattrOp::Get)?;

        let result = call_dual_mode(buf, XATTR_SIZE_MAX, |arg, reply| {
            self.backend().getxattr(node, arg, name.as_bytes(), reply)
        });
        let reply = self.map_not_implemented(XattrOp::Get, result)?;

        Ok(reply.len())
    }

    /// 列出所有扩展属性名
    ///
    /// 对应 FUSE 的 `FUSE_LISTXATTR`
    ///
    /// 填充模式下返回的列表会先经过校验（见 [`verify_xattr_list`]），
    /// buffer 包含形如 "user.comment\0security.selinux\0" 的名称序列
    ///
    /// # 返回
    ///
    /// - `XattrBuf::Query`：所需缓冲区大小（不超过 `XATTR_LIST_MAX`）
    /// - `XattrBuf::Fill`：写入的字节数
    pub fn list_attributes(&self, node: NodeId, buf: XattrBuf<'_>) -> Result<usize> {
        if !self.host().allow_current_process() {
            return Err(Error::new(ErrorKind::PermissionDenied, "process not allowed on this mount"));
        }
        self.check_supported(XattrOp::List)?;

        let result = call_dual_mode(buf, XATTR_LIST_MAX, |arg, reply| {
            self.backend().listxattr(node, arg, reply)
        });
        let reply = self.map_not_implemented(XattrOp::List, result)?;

        match reply {
            Reply::Filled(list) => verify_xattr_list(list),
            Reply::Size(size) => Ok(size),
        }
    }

    /// 删除扩展属性
    ///
    /// 对应 FUSE 的 `FUSE_REMOVEXATTR`
    pub fn remove_attribute(&self, node: NodeId, name: &[u8]) -> Result<()> {
        let name = XattrName::new(name)?;
        self.check_supported(XattrOp::Remove)?;

        let result = self.backend().removexattr(node, name.as_bytes());
        self.map_not_implemented(XattrOp::Remove, result)?;

        self.notify_changed(node);
        Ok(())
    }

    /// 能力缓存短路
    fn check_supported(&self, op: XattrOp) -> Result<()> {
        if self.caps().is_unsupported(op) {
            log::debug!("[XATTR] {} short-circuited: unsupported", op.name());
            return Err(Error::new(ErrorKind::Unsupported, "xattr operation not supported"));
        }
        Ok(())
    }

    /// 后端"未实现"转换为 `Unsupported` 并记入能力缓存
    fn map_not_implemented<T>(&self, op: XattrOp, result: Result<T>) -> Result<T> {
        match result {
            Err(err) if err.kind() == ErrorKind::NotImplemented => {
                self.caps().mark_unsupported(op);
                Err(Error::new(ErrorKind::Unsupported, "xattr operation not supported"))
            }
            other => other,
        }
    }

    /// 修改成功后的宿主通知
    fn notify_changed(&self, node: NodeId) {
        self.host().invalidate_attr(node);
        self.host().update_ctime(node);
    }
}
