//! C API 兼容层
//!
//! 把 [`Connection`](crate::Connection) 的 `Result` 转成宿主的 C 返回约定：
//! 成功返回非负字节数（或 0），失败返回严格为负的 `-errno`。
//! 缓冲区参数为 `None` 或空切片时按查询模式处理。

pub mod xattr;
