//! 宿主回调
//!
//! 桥接层需要宿主提供的三项能力：调用进程的权限预检，
//! 以及修改成功后的属性缓存失效和 ctime 更新通知。

use crate::types::NodeId;

/// 宿主回调接口
///
/// 缓存失效策略、时间戳来源和权限判断都由宿主决定，本层只负责在正确的时机调用。
pub trait XattrHost {
    /// 当前调用进程是否允许访问该挂载
    ///
    /// 仅在 listxattr 之前检查
    fn allow_current_process(&self) -> bool {
        true
    }

    /// 节点的属性元数据已失效
    fn invalidate_attr(&self, node: NodeId);

    /// 更新节点的 ctime
    fn update_ctime(&self, node: NodeId);
}

/// 不做任何事的宿主
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl XattrHost for NoopHost {
    fn invalidate_attr(&self, _node: NodeId) {}

    fn update_ctime(&self, _node: NodeId) {}
}

impl<H: XattrHost + ?Sized> XattrHost for &H {
    fn allow_current_process(&self) -> bool {
        (**self).allow_current_process()
    }

    fn invalidate_attr(&self, node: NodeId) {
        (**self).invalidate_attr(node)
    }

    fn update_ctime(&self, node: NodeId) {
        (**self).update_ctime(node)
    }
}
