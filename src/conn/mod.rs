//! 连接
//!
//! 一个 [`Connection`] 对应一个已挂载的后端实例，持有：
//! - 后端操作表
//! - 宿主回调
//! - 挂载配置
//! - 能力缓存
//!
//! 挂载时创建，卸载时销毁；能力标志与连接同生命周期。

mod caps;
mod host;

pub use caps::CapabilityCache;
pub use host::{NoopHost, XattrHost};

use crate::backend::XattrBackend;
use crate::types::XattrOps;

/// 连接配置
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnConfig {
    /// 是否启用 POSIX ACL 处理器
    pub posix_acl: bool,
    /// 挂载时即视为不支持的操作
    pub unsupported: XattrOps,
}

/// 已挂载的后端连接
pub struct Connection<B: XattrBackend, H: XattrHost> {
    backend: B,
    host: H,
    config: ConnConfig,
    caps: CapabilityCache,
}

impl<B: XattrBackend, H: XattrHost> Connection<B, H> {
    /// 以默认配置创建连接
    pub fn new(backend: B, host: H) -> Self {
        Self::with_config(backend, host, ConnConfig::default())
    }

    /// 以指定配置创建连接
    pub fn with_config(backend: B, host: H, config: ConnConfig) -> Self {
        if !config.unsupported.is_empty() {
            log::debug!("[XATTR] mount with preset unsupported ops {:?}", config.unsupported);
        }
        Self {
            backend,
            host,
            config,
            caps: CapabilityCache::with_unsupported(config.unsupported),
        }
    }

    /// 后端
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 宿主回调
    pub fn host(&self) -> &H {
        &self.host
    }

    /// 挂载配置
    pub fn config(&self) -> &ConnConfig {
        &self.config
    }

    /// 能力缓存
    pub fn caps(&self) -> &CapabilityCache {
        &self.caps
    }

    /// 卸载，交回后端和宿主
    pub fn into_parts(self) -> (B, H) {
        (self.backend, self.host)
    }
}

impl<B: XattrBackend, H: XattrHost> core::fmt::Debug for Connection<B, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Connection")
            .field("config", &self.config)
            .field("unsupported", &self.caps.snapshot())
            .finish()
    }
}
