//! 能力缓存
//!
//! 记录后端已经明确表示"未实现"的操作种类。
//!
//! 每种操作一个原子布尔标志，只会从 false 变为 true，连接存活期间不会复位。
//! 并发调用者同时发现"未实现"并重复置位是无害的，因此不需要锁。

use crate::types::{XattrOp, XattrOps};
use core::sync::atomic::{AtomicBool, Ordering};

/// 每连接的"不支持"标志表
#[derive(Debug, Default)]
pub struct CapabilityCache {
    unsupported: [AtomicBool; XattrOp::COUNT],
}

impl CapabilityCache {
    /// 创建全部标志为 false 的缓存
    pub const fn new() -> Self {
        Self {
            unsupported: [
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
            ],
        }
    }

    /// 创建并预先标记一组操作
    pub fn with_unsupported(ops: XattrOps) -> Self {
        let cache = Self::new();
        for op in ops.iter_ops() {
            cache.mark_unsupported(op);
        }
        cache
    }

    /// 查询操作是否已知不被支持
    #[inline]
    pub fn is_unsupported(&self, op: XattrOp) -> bool {
        self.unsupported[op.index()].load(Ordering::Relaxed)
    }

    /// 标记操作不被支持
    ///
    /// 幂等且不可逆
    ///
    /// # 返回
    ///
    /// 本次调用是否是第一次置位
    pub fn mark_unsupported(&self, op: XattrOp) -> bool {
        let was_set = self.unsupported[op.index()].swap(true, Ordering::Relaxed);
        if !was_set {
            log::info!("[CAPS] {} marked unsupported for this connection", op.name());
        }
        !was_set
    }

    /// 当前已知不被支持的操作集合
    pub fn snapshot(&self) -> XattrOps {
        XattrOp::ALL
            .iter()
            .filter(|op| self.is_unsupported(**op))
            .fold(XattrOps::empty(), |acc, op| acc | op.as_ops())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_supported() {
        let cache = CapabilityCache::new();
        for op in XattrOp::ALL {
            assert!(!cache.is_unsupported(op));
        }
        assert!(cache.snapshot().is_empty());
    }

    #[test]
    fn test_mark_is_sticky_and_idempotent() {
        let cache = CapabilityCache::new();
        assert!(cache.mark_unsupported(XattrOp::Get));
        assert!(!cache.mark_unsupported(XattrOp::Get));
        assert!(cache.is_unsupported(XattrOp::Get));
        assert!(!cache.is_unsupported(XattrOp::Set));
        assert_eq!(cache.snapshot(), XattrOps::GET);
    }

    #[test]
    fn test_preset_ops() {
        let cache = CapabilityCache::with_unsupported(XattrOps::LIST | XattrOps::SET);
        assert!(cache.is_unsupported(XattrOp::List));
        assert!(cache.is_unsupported(XattrOp::Set));
        assert!(!cache.is_unsupported(XattrOp::Remove));
    }

    #[test]
    fn test_concurrent_mark_once() {
        use core::sync::atomic::AtomicUsize;
        use std::thread;

        let cache = CapabilityCache::new();
        let first = AtomicUsize::new(0);

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    if cache.mark_unsupported(XattrOp::Get) {
                        first.fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });

        assert_eq!(first.load(Ordering::Relaxed), 1);
        assert!(cache.is_unsupported(XattrOp::Get));
        assert_eq!(cache.snapshot(), XattrOps::GET);
    }
}
