//! 测试用后端和宿主

use crate::backend::{XattrBackend, XattrReply};
use crate::conn::XattrHost;
use crate::error::{Error, ErrorKind, Result};
use crate::types::{NodeId, SetFlags, XattrOp, XattrOps};
use crate::wire::{GetxattrIn, GetxattrOut, SetxattrIn};
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// 内存中的属性存储，带调用计数
#[derive(Default)]
pub(crate) struct MockBackend {
    store: RefCell<BTreeMap<(u64, Vec<u8>), Vec<u8>>>,
    calls: [Cell<usize>; XattrOp::COUNT],
    /// 这些操作返回 NotImplemented
    pub not_implemented: XattrOps,
    /// 查询模式下报告的大小（覆盖真实值）
    pub reported_size: Option<u32>,
    /// listxattr 填充模式下原样写出的字节
    pub raw_list: Option<Vec<u8>>,
    /// 所有调用都返回此错误
    pub fail_with: Option<ErrorKind>,
    /// 所有调用都以此原始 errno 失败（可为负值）
    pub fail_errno: Option<i32>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self, op: XattrOp) -> usize {
        self.calls[op.index()].get()
    }

    pub fn total_calls(&self) -> usize {
        XattrOp::ALL.iter().map(|op| self.calls(*op)).sum()
    }

    fn enter(&self, op: XattrOp) -> Result<()> {
        let counter = &self.calls[op.index()];
        counter.set(counter.get() + 1);
        if self.not_implemented.contains(op.as_ops()) {
            return Err(Error::new(ErrorKind::NotImplemented, "mock: not implemented"));
        }
        if let Some(errno) = self.fail_errno {
            return Err(Error::from_errno(errno));
        }
        if let Some(kind) = self.fail_with {
            return Err(Error::new(kind, "mock: injected failure"));
        }
        Ok(())
    }

    fn reply(&self, reply: XattrReply<'_>, data: &[u8]) -> Result<usize> {
        match (reply, self.reported_size) {
            (XattrReply::Size(out), Some(size)) => {
                *out = GetxattrOut { size, padding: 0 };
                Ok(0)
            }
            (reply, _) => reply.reply(data),
        }
    }
}

impl XattrBackend for MockBackend {
    fn setxattr(&self, node: NodeId, arg: &SetxattrIn, name: &[u8], value: &[u8]) -> Result<()> {
        self.enter(XattrOp::Set)?;
        assert_eq!(arg.size as usize, value.len());

        let mut store = self.store.borrow_mut();
        let key = (node.0, name.to_vec());
        let flags = arg.set_flags();
        let exists = store.contains_key(&key);
        if flags.contains(SetFlags::CREATE) && exists {
            return Err(Error::new(ErrorKind::AlreadyExists, "mock: xattr exists"));
        }
        if flags.contains(SetFlags::REPLACE) && !exists {
            return Err(Error::new(ErrorKind::NotFound, "mock: xattr not found"));
        }
        store.insert(key, value.to_vec());
        Ok(())
    }

    fn getxattr(&self, node: NodeId, _arg: &GetxattrIn, name: &[u8], reply: XattrReply<'_>) -> Result<usize> {
        self.enter(XattrOp::Get)?;
        let store = self.store.borrow();
        let value = store
            .get(&(node.0, name.to_vec()))
            .ok_or(Error::new(ErrorKind::NotFound, "mock: xattr not found"))?;
        self.reply(reply, value)
    }

    fn listxattr(&self, node: NodeId, _arg: &GetxattrIn, reply: XattrReply<'_>) -> Result<usize> {
        self.enter(XattrOp::List)?;
        let list = match &self.raw_list {
            Some(raw) => raw.clone(),
            None => {
                let store = self.store.borrow();
                let mut list = Vec::new();
                for (_, name) in store.keys().filter(|(id, _)| *id == node.0) {
                    list.extend_from_slice(name);
                    list.push(0);
                }
                list
            }
        };
        self.reply(reply, &list)
    }

    fn removexattr(&self, node: NodeId, name: &[u8]) -> Result<()> {
        self.enter(XattrOp::Remove)?;
        self.store
            .borrow_mut()
            .remove(&(node.0, name.to_vec()))
            .map(|_| ())
            .ok_or(Error::new(ErrorKind::NotFound, "mock: xattr not found"))
    }
}

/// 记录通知的宿主
pub(crate) struct MockHost {
    pub allow: bool,
    pub permission_checks: Cell<usize>,
    pub invalidations: Cell<usize>,
    pub ctime_updates: Cell<usize>,
    pub last_node: Cell<Option<NodeId>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            allow: true,
            permission_checks: Cell::new(0),
            invalidations: Cell::new(0),
            ctime_updates: Cell::new(0),
            last_node: Cell::new(None),
        }
    }

    pub fn denying() -> Self {
        Self {
            allow: false,
            ..Self::new()
        }
    }
}

impl XattrHost for MockHost {
    fn allow_current_process(&self) -> bool {
        self.permission_checks.set(self.permission_checks.get() + 1);
        self.allow
    }

    fn invalidate_attr(&self, node: NodeId) {
        self.invalidations.set(self.invalidations.get() + 1);
        self.last_node.set(Some(node));
    }

    fn update_ctime(&self, node: NodeId) {
        self.ctime_updates.set(self.ctime_updates.get() + 1);
        self.last_node.set(Some(node));
    }
}
